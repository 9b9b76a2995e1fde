#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventClass {
    Keyboard,
    Mouse,
}

#[derive(Debug, Clone, Copy)]
pub struct Event {
    pub name: &'static str,
    pub class: EventClass,
    pub documentation: &'static str,
}

pub const EVENTS: &[Event] = &[
    Event {
        name: "click",
        class: EventClass::Mouse,
        documentation: "Click event handler.",
    },
    Event {
        name: "dblclick",
        class: EventClass::Mouse,
        documentation: "Double click event handler.",
    },
    Event {
        name: "auxclick",
        class: EventClass::Mouse,
        documentation: "Auxiliary click event handler.",
    },
    Event {
        name: "context",
        class: EventClass::Mouse,
        documentation: "Context click event handler.",
    },
    Event {
        name: "mouseover",
        class: EventClass::Mouse,
        documentation: "Mouse over event handler.",
    },
    Event {
        name: "mousemove",
        class: EventClass::Mouse,
        documentation: "Mouse move event handler.",
    },
    Event {
        name: "mouseenter",
        class: EventClass::Mouse,
        documentation: "Mouse enter event handler.",
    },
    Event {
        name: "mouseleave",
        class: EventClass::Mouse,
        documentation: "Mouse leave event handler.",
    },
    Event {
        name: "mouseout",
        class: EventClass::Mouse,
        documentation: "Mouse out event handler.",
    },
    Event {
        name: "mouseup",
        class: EventClass::Mouse,
        documentation: "Mouse up event handler.",
    },
    Event {
        name: "mousedown",
        class: EventClass::Mouse,
        documentation: "Mouse down event handler.",
    },
    Event {
        name: "keyup",
        class: EventClass::Keyboard,
        documentation: "Keyup event handler.",
    },
    Event {
        name: "keydown",
        class: EventClass::Keyboard,
        documentation: "Keydown event handler.",
    },
    Event {
        name: "keypress",
        class: EventClass::Keyboard,
        documentation: "Keypress event handler.",
    },
    Event {
        name: "input",
        class: EventClass::Keyboard,
        documentation: "Input event handler.",
    },
    Event {
        name: "change",
        class: EventClass::Keyboard,
        documentation: "Change event handler.",
    },
    Event {
        name: "submit",
        class: EventClass::Keyboard,
        documentation: "Submit event handler.",
    },
];

pub fn events_of(class: EventClass) -> impl Iterator<Item = &'static Event> {
    EVENTS.iter().filter(move |event| event.class == class)
}
