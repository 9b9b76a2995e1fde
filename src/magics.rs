/// Magic properties reachable with the `$` sigil inside reactive expressions.
#[derive(Debug, Clone, Copy)]
pub struct Magic {
    pub name: &'static str,
    pub documentation: &'static str,
}

pub const MAGICS: &[Magic] = &[Magic {
    name: "el",
    documentation: "\
Property that can be used to retrieve the current DOM node.
**Example:**
```html
<button @click=\"$el.innerHTML = 'Hello World!'\">Replace me with \"Hello World!\"</button>
```
",
}];
