/// Core Alpine directives offered at bare attribute positions.
#[derive(Debug, Clone, Copy)]
pub struct Directive {
    pub name: &'static str,
    pub snippet: &'static str,
    pub documentation: &'static str,
}

pub const DIRECTIVES: &[Directive] = &[
    Directive {
        name: "x-data",
        snippet: "x-data=\"${1}\"",
        documentation: "Defines a chunk of HTML as an Alpine component and provides the reactive data for that component to reference.",
    },
    Directive {
        name: "x-init",
        snippet: "x-init=\"${1}\"",
        documentation: "Allows you to hook into the initialization phase of any element in Alpine.",
    },
    Directive {
        name: "x-show",
        snippet: "x-show=\"${1}\"",
        documentation: "Allows you to conditionally show or hide an element based on a boolean value.",
    },
    Directive {
        name: "x-bind",
        snippet: "x-bind:${1}",
        documentation: "Allows you to set HTML attributes on elements based on the result of JavaScript expressions.",
    },
    Directive {
        name: "x-on",
        snippet: "x-on:${1}",
        documentation: "Allows you to easily run code on dispatched DOM events.",
    },
    Directive {
        name: "x-text",
        snippet: "x-text=\"${1}\"",
        documentation: "Sets the text content of an element to the result of a given expression.",
    },
    Directive {
        name: "x-html",
        snippet: "x-html=\"${1}\"",
        documentation: "Sets the \"innerHTML\" property of an element to the result of a given expression.",
    },
];
