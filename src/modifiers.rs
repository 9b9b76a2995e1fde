use crate::events::EventClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierClass {
    Behavior,
    Keyboard,
    Mouse,
}

#[derive(Debug, Clone, Copy)]
pub struct Modifier {
    pub name: &'static str,
    pub class: ModifierClass,
}

pub const MODIFIERS: &[Modifier] = &[
    Modifier { name: "prevent", class: ModifierClass::Behavior },
    Modifier { name: "stop", class: ModifierClass::Behavior },
    Modifier { name: "outside", class: ModifierClass::Behavior },
    Modifier { name: "window", class: ModifierClass::Behavior },
    Modifier { name: "document", class: ModifierClass::Behavior },
    Modifier { name: "once", class: ModifierClass::Behavior },
    Modifier { name: "debounce", class: ModifierClass::Behavior },
    Modifier { name: "throttle", class: ModifierClass::Behavior },
    Modifier { name: "self", class: ModifierClass::Behavior },
    Modifier { name: "camel", class: ModifierClass::Behavior },
    Modifier { name: "dot", class: ModifierClass::Behavior },
    Modifier { name: "passive", class: ModifierClass::Behavior },
    Modifier { name: "capture", class: ModifierClass::Behavior },
    Modifier { name: "enter", class: ModifierClass::Keyboard },
    Modifier { name: "escape", class: ModifierClass::Keyboard },
    Modifier { name: "tab", class: ModifierClass::Keyboard },
    Modifier { name: "space", class: ModifierClass::Keyboard },
    Modifier { name: "backspace", class: ModifierClass::Keyboard },
    Modifier { name: "delete", class: ModifierClass::Keyboard },
    Modifier { name: "up", class: ModifierClass::Keyboard },
    Modifier { name: "down", class: ModifierClass::Keyboard },
    Modifier { name: "left", class: ModifierClass::Keyboard },
    Modifier { name: "right", class: ModifierClass::Keyboard },
    Modifier { name: "shift", class: ModifierClass::Keyboard },
    Modifier { name: "ctrl", class: ModifierClass::Keyboard },
    Modifier { name: "alt", class: ModifierClass::Keyboard },
    Modifier { name: "slash", class: ModifierClass::Keyboard },
    Modifier { name: "period", class: ModifierClass::Keyboard },
    Modifier { name: "comma", class: ModifierClass::Keyboard },
    Modifier { name: "semicolon", class: ModifierClass::Keyboard },
    Modifier { name: "cmd", class: ModifierClass::Keyboard },
    Modifier { name: "meta", class: ModifierClass::Keyboard },
    Modifier { name: "caps-lock", class: ModifierClass::Keyboard },
    Modifier { name: "shift", class: ModifierClass::Mouse },
    Modifier { name: "ctrl", class: ModifierClass::Mouse },
    Modifier { name: "alt", class: ModifierClass::Mouse },
    Modifier { name: "meta", class: ModifierClass::Mouse },
    Modifier { name: "cmd", class: ModifierClass::Mouse },
];

pub fn modifiers_of(class: ModifierClass) -> impl Iterator<Item = &'static Modifier> {
    MODIFIERS.iter().filter(move |modifier| modifier.class == class)
}

/// Modifiers relevant after an event of the given class: the behavior set is
/// always applicable, plus the key or mouse partition matching the event.
pub fn modifiers_for_event(class: EventClass) -> impl Iterator<Item = &'static Modifier> {
    let specific = match class {
        EventClass::Keyboard => ModifierClass::Keyboard,
        EventClass::Mouse => ModifierClass::Mouse,
    };
    MODIFIERS
        .iter()
        .filter(move |modifier| modifier.class == ModifierClass::Behavior || modifier.class == specific)
}
