use std::sync::OnceLock;

use regex::Regex;

use crate::events::{events_of, EventClass};
use crate::modifiers::modifiers_for_event;

/// Classification of the bare (unquoted) token ending at the cursor. Decides
/// which catalog answers the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenContext {
    /// After `x-on:` — full event catalog.
    EventBinding,
    /// After `x-bind:` — full attribute catalog.
    AttributeBinding,
    /// After a lone `:` — attribute catalog rendered in shorthand form.
    AttributeShorthand,
    /// After `@` — event catalog rendered in shorthand form.
    EventShorthand,
    /// After `event.` or `event.modifier.` — modifier catalog for the event class.
    ModifierChain(EventClass),
    /// Anything else inside a tag — directive catalog.
    Directive,
}

fn modifier_chain_re(class: EventClass) -> &'static Regex {
    static KEYBOARD: OnceLock<Regex> = OnceLock::new();
    static MOUSE: OnceLock<Regex> = OnceLock::new();
    let cell = match class {
        EventClass::Keyboard => &KEYBOARD,
        EventClass::Mouse => &MOUSE,
    };
    cell.get_or_init(|| {
        let events = events_of(class)
            .map(|event| regex::escape(event.name))
            .collect::<Vec<_>>()
            .join("|");
        let modifiers = modifiers_for_event(class)
            .map(|modifier| regex::escape(modifier.name))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?s)(@|x-on:)({events})\.(({modifiers})\.)*$"))
            .expect("modifier chain pattern is built from fixed catalog names")
    })
}

/// Applies the decision table in order, first match wins. `before` is the
/// fragment text ending at the cursor; callers have already ruled out quoted
/// values.
pub fn classify(before: &str) -> TokenContext {
    if before.ends_with("x-on:") {
        TokenContext::EventBinding
    } else if before.ends_with("x-bind:") {
        TokenContext::AttributeBinding
    } else if before.ends_with(" :") {
        TokenContext::AttributeShorthand
    } else if before.ends_with('@') {
        TokenContext::EventShorthand
    } else if before.ends_with('.') {
        if modifier_chain_re(EventClass::Keyboard).is_match(before) {
            TokenContext::ModifierChain(EventClass::Keyboard)
        } else if modifier_chain_re(EventClass::Mouse).is_match(before) {
            TokenContext::ModifierChain(EventClass::Mouse)
        } else {
            TokenContext::Directive
        }
    } else {
        TokenContext::Directive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_form_prefixes() {
        assert_eq!(classify("<button x-on:"), TokenContext::EventBinding);
        assert_eq!(classify("<img x-bind:"), TokenContext::AttributeBinding);
    }

    #[test]
    fn shorthand_sigils() {
        assert_eq!(classify("<a :"), TokenContext::AttributeShorthand);
        assert_eq!(classify("<button @"), TokenContext::EventShorthand);
    }

    #[test]
    fn modifier_chains_pick_the_event_class() {
        assert_eq!(
            classify("<input @keyup."),
            TokenContext::ModifierChain(EventClass::Keyboard)
        );
        assert_eq!(
            classify("<button x-on:click."),
            TokenContext::ModifierChain(EventClass::Mouse)
        );
        assert_eq!(
            classify("<button @click.prevent."),
            TokenContext::ModifierChain(EventClass::Mouse)
        );
        assert_eq!(
            classify("<input @keydown.enter."),
            TokenContext::ModifierChain(EventClass::Keyboard)
        );
    }

    #[test]
    fn dot_without_an_event_chain_is_not_a_modifier_position() {
        assert_eq!(classify("<div x-data.\n."), TokenContext::Directive);
        assert_eq!(classify("<div something."), TokenContext::Directive);
    }

    #[test]
    fn everything_else_is_a_directive_position() {
        assert_eq!(classify("<div x-"), TokenContext::Directive);
        assert_eq!(classify("<div "), TokenContext::Directive);
        assert_eq!(classify("<button @cli"), TokenContext::Directive);
    }
}
