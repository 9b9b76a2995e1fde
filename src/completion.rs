use serde_json::json;
use tower_lsp::lsp_types::{
    CompletionItem, CompletionItemKind, Documentation, InsertTextFormat, MarkupContent, MarkupKind,
    Position,
};

use crate::attributes::{Attribute, ATTRIBUTES};
use crate::bridge::ExpressionBridge;
use crate::directives::DIRECTIVES;
use crate::document::MarkupDocument;
use crate::events::{EventClass, EVENTS};
use crate::expression::{extract_bindings, Binding, BindingKind};
use crate::fragment::{
    extract_fragment, in_quoted_value, is_in_open_tag, live_snippet, FRAGMENT_WINDOW_LINES,
};
use crate::lineindex::LineIndex;
use crate::magics::MAGICS;
use crate::matcher::{classify, TokenContext};
use crate::modifiers::{modifiers_for_event, ModifierClass};

fn catalog_origin() -> serde_json::Value {
    json!({ "source": "alpine" })
}

fn binding_origin() -> serde_json::Value {
    json!({ "source": "x-data" })
}

pub fn directive_completions() -> Vec<CompletionItem> {
    DIRECTIVES
        .iter()
        .map(|directive| CompletionItem {
            label: directive.name.to_string(),
            kind: Some(CompletionItemKind::KEYWORD),
            insert_text: Some(directive.snippet.to_string()),
            insert_text_format: Some(InsertTextFormat::SNIPPET),
            documentation: Some(Documentation::String(directive.documentation.to_string())),
            data: Some(catalog_origin()),
            ..Default::default()
        })
        .collect()
}

pub fn event_completions() -> Vec<CompletionItem> {
    EVENTS
        .iter()
        .map(|event| CompletionItem {
            label: event.name.to_string(),
            kind: Some(CompletionItemKind::EVENT),
            insert_text: Some(event.name.to_string()),
            insert_text_format: Some(InsertTextFormat::PLAIN_TEXT),
            documentation: Some(Documentation::String(event.documentation.to_string())),
            data: Some(catalog_origin()),
            ..Default::default()
        })
        .collect()
}

pub fn event_shorthand_completions() -> Vec<CompletionItem> {
    EVENTS
        .iter()
        .map(|event| CompletionItem {
            label: format!("@{}", event.name),
            kind: Some(CompletionItemKind::EVENT),
            insert_text: Some(format!("@{}=\"${{1}}\"", event.name)),
            insert_text_format: Some(InsertTextFormat::SNIPPET),
            documentation: Some(Documentation::String(format!(
                "{}\nShorthand for x-on:{}",
                event.documentation, event.name
            ))),
            data: Some(catalog_origin()),
            ..Default::default()
        })
        .collect()
}

fn attribute_documentation(attribute: &Attribute) -> String {
    let mut value = attribute.documentation.to_string();
    if !attribute.belongs_to.is_empty() {
        let elements = attribute
            .belongs_to
            .iter()
            .map(|element| format!("`<{element}>`"))
            .collect::<Vec<_>>()
            .join(", ");
        value.push_str(&format!("\n\nApplies to: {elements}"));
    }
    if attribute.deprecated {
        value.push_str("\n\n*Deprecated.*");
    }
    value
}

fn markdown(value: String) -> Documentation {
    Documentation::MarkupContent(MarkupContent {
        kind: MarkupKind::Markdown,
        value,
    })
}

pub fn attribute_completions() -> Vec<CompletionItem> {
    ATTRIBUTES
        .iter()
        .map(|attribute| CompletionItem {
            label: attribute.name.to_string(),
            kind: Some(CompletionItemKind::VALUE),
            insert_text: Some(format!("{}=\"${{1}}\"", attribute.name)),
            insert_text_format: Some(InsertTextFormat::SNIPPET),
            documentation: Some(markdown(attribute_documentation(attribute))),
            data: Some(catalog_origin()),
            ..Default::default()
        })
        .collect()
}

pub fn attribute_shorthand_completions() -> Vec<CompletionItem> {
    ATTRIBUTES
        .iter()
        .map(|attribute| CompletionItem {
            label: format!(":{}", attribute.name),
            kind: Some(CompletionItemKind::VALUE),
            insert_text: Some(format!(":{}=\"${{1}}\"", attribute.name)),
            insert_text_format: Some(InsertTextFormat::SNIPPET),
            documentation: Some(markdown(format!(
                "{}\nShorthand for x-bind:{}",
                attribute_documentation(attribute),
                attribute.name
            ))),
            data: Some(catalog_origin()),
            ..Default::default()
        })
        .collect()
}

pub fn modifier_completions(class: EventClass) -> Vec<CompletionItem> {
    modifiers_for_event(class)
        .map(|modifier| {
            let (label, documentation) = match modifier.class {
                ModifierClass::Behavior => (
                    modifier.name.to_string(),
                    "Behavior modifier for Alpine.js. Use with x-on: or @ directives.",
                ),
                ModifierClass::Keyboard => (
                    format!("[KEY] {}", modifier.name),
                    "Key modifier for Alpine.js. Use with x-on: or @ directives.",
                ),
                ModifierClass::Mouse => (
                    format!("[KEY] {}", modifier.name),
                    "Mouse modifier for Alpine.js. Use with x-on: or @ directives.",
                ),
            };
            CompletionItem {
                label,
                kind: Some(CompletionItemKind::ENUM_MEMBER),
                insert_text: Some(modifier.name.to_string()),
                insert_text_format: Some(InsertTextFormat::PLAIN_TEXT),
                documentation: Some(Documentation::String(documentation.to_string())),
                data: Some(catalog_origin()),
                ..Default::default()
            }
        })
        .collect()
}

pub fn magic_completions() -> Vec<CompletionItem> {
    MAGICS
        .iter()
        .map(|magic| CompletionItem {
            label: format!("${}", magic.name),
            kind: Some(CompletionItemKind::PROPERTY),
            documentation: Some(markdown(magic.documentation.to_string())),
            data: Some(catalog_origin()),
            ..Default::default()
        })
        .collect()
}

fn binding_completion(binding: &Binding) -> CompletionItem {
    let label = binding.label();
    CompletionItem {
        detail: Some(format!("x-data: {label}")),
        label,
        kind: Some(match binding.kind {
            BindingKind::Value => CompletionItemKind::VARIABLE,
            BindingKind::Callable => CompletionItemKind::METHOD,
        }),
        data: Some(binding_origin()),
        ..Default::default()
    }
}

/// Resolves completions for a cursor position.
///
/// Outside any open tag the result is empty. Inside a tag but outside a quoted
/// value, the token grammar picks a static catalog and anything already
/// written on the element is filtered out. Inside a quoted value, the scope
/// chain supplies local bindings and the expression bridge is consulted for
/// value-level completions; every degradation along the way shrinks the result
/// instead of failing it.
pub async fn resolve_completions(
    uri: &str,
    text: &str,
    position: Position,
    bridge: Option<&ExpressionBridge>,
) -> Vec<CompletionItem> {
    let index = LineIndex::new(text);
    let fragment = extract_fragment(text, &index, &position, FRAGMENT_WINDOW_LINES);

    if !is_in_open_tag(fragment.before) {
        return Vec::new();
    }

    let offset = index.clamped_offset(&position);

    if !in_quoted_value(fragment.before) {
        let document = MarkupDocument::parse(text);
        let existing = document.attributes_at(offset);
        let mut items = match classify(fragment.before) {
            TokenContext::EventBinding => event_completions(),
            TokenContext::AttributeBinding => attribute_completions(),
            TokenContext::AttributeShorthand => attribute_shorthand_completions(),
            TokenContext::EventShorthand => event_shorthand_completions(),
            TokenContext::ModifierChain(class) => modifier_completions(class),
            TokenContext::Directive => directive_completions(),
        };
        items.retain(|item| !existing.contains(&item.label.to_ascii_lowercase()));
        return items;
    }

    if fragment.before.ends_with('$') {
        return magic_completions();
    }

    let document = MarkupDocument::parse(text);
    let chain = document.scope_chain(offset);
    let bindings: Vec<Binding> = chain
        .iter()
        .flat_map(|expression| extract_bindings(expression))
        .collect();

    let snippet = live_snippet(fragment.before, fragment.after);
    let mut items = Vec::new();
    if let Some(bridge) = bridge {
        if let Some(remote) = bridge.complete(uri, &chain, &bindings, &snippet).await {
            items.extend(remote);
        }
    }
    items.extend(bindings.iter().map(binding_completion));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{BridgeError, ExpressionIntelligence, RemoteCompletions};
    use std::sync::{Arc, Mutex};
    use tower_lsp::async_trait;

    async fn resolve(text: &str, bridge: Option<&ExpressionBridge>) -> Vec<CompletionItem> {
        let position = Position::new(0, text.len() as u32);
        resolve_completions("file:///test.html", text, position, bridge).await
    }

    fn labels(items: &[CompletionItem]) -> Vec<&str> {
        items.iter().map(|item| item.label.as_str()).collect()
    }

    #[tokio::test]
    async fn outside_a_tag_yields_nothing() {
        assert!(resolve("<div>hello", None).await.is_empty());
        assert!(resolve("plain text", None).await.is_empty());
        assert!(resolve("<div></div>", None).await.is_empty());
    }

    #[tokio::test]
    async fn bare_directive_position_offers_the_full_catalog() {
        let items = resolve("<div x-", None).await;
        let labels = labels(&items);
        assert_eq!(labels.len(), DIRECTIVES.len());
        assert!(labels.contains(&"x-data"));
        assert!(labels.contains(&"x-text"));
    }

    #[tokio::test]
    async fn already_written_attributes_are_not_resuggested() {
        let items = resolve(r#"<div x-data="{}" X-SHOW="open" x-"#, None).await;
        let labels = labels(&items);
        assert!(!labels.contains(&"x-data"));
        assert!(!labels.contains(&"x-show"));
        assert!(labels.contains(&"x-text"));
    }

    #[tokio::test]
    async fn event_shorthand_marks_the_long_form() {
        let items = resolve("<button @", None).await;
        assert_eq!(items.len(), EVENTS.len());
        let click = items.iter().find(|item| item.label == "@click").unwrap();
        match click.documentation.as_ref().unwrap() {
            Documentation::String(doc) => assert!(doc.contains("Shorthand for x-on:click")),
            other => panic!("expected plain documentation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn modifier_chain_offers_class_relevant_modifiers() {
        let items = resolve("<input @keyup.", None).await;
        let labels = labels(&items);
        assert!(labels.contains(&"[KEY] enter"));
        assert!(labels.contains(&"prevent"));
        assert!(!labels.contains(&"mouseover"));
    }

    #[tokio::test]
    async fn magic_sigil_inside_quotes_offers_magic_properties() {
        let items = resolve(r#"<div x-data="{}"><span @click="$"#, None).await;
        assert_eq!(labels(&items), vec!["$el"]);
    }

    #[tokio::test]
    async fn quoted_expression_offers_scope_bindings_without_a_bridge() {
        let items = resolve(r#"<div x-data="{ count: 0, inc() {} }"><span x-text="cou"#, None).await;
        assert_eq!(labels(&items), vec!["count", "inc()"]);
        assert_eq!(
            items[0].data,
            Some(serde_json::json!({ "source": "x-data" }))
        );
        assert_eq!(items[1].kind, Some(CompletionItemKind::METHOD));
    }

    #[tokio::test]
    async fn nested_scopes_shadow_by_order_keeping_duplicates() {
        let text = r#"<div x-data="{ x: 1 }"><p x-data="{ x: 2, y: 3 }"><b x-show="x"#;
        let items = resolve(text, None).await;
        assert_eq!(labels(&items), vec!["x", "y", "x"]);
    }

    #[derive(Default)]
    struct StubCapability {
        last_change: Mutex<Option<String>>,
    }

    #[async_trait]
    impl ExpressionIntelligence for StubCapability {
        async fn open_document(&self, _: &str, _: i32, _: &str) -> Result<(), BridgeError> {
            Ok(())
        }

        async fn change_document(&self, _: &str, _: i32, text: &str) -> Result<(), BridgeError> {
            *self.last_change.lock().unwrap() = Some(text.to_string());
            Ok(())
        }

        async fn complete(&self, _: &str, _: Position) -> Result<RemoteCompletions, BridgeError> {
            Ok(RemoteCompletions::Items(vec![CompletionItem::new_simple(
                "toUpperCase".into(),
                "remote".into(),
            )]))
        }
    }

    #[tokio::test]
    async fn quoted_expression_merges_remote_and_local_items() {
        let capability = Arc::new(StubCapability::default());
        let bridge = ExpressionBridge::new(capability.clone());
        let text = r#"<div x-data="{ count: 0 }"><span x-text="cou"#;
        let items = resolve(text, Some(&bridge)).await;

        assert_eq!(labels(&items), vec!["toUpperCase", "count"]);
        assert_eq!(
            capability.last_change.lock().unwrap().as_deref(),
            Some("const { count } = { count: 0 };\ncou")
        );
    }

    #[tokio::test]
    async fn literal_angle_brackets_in_values_do_not_confuse_scope_resolution() {
        let text = r#"<div x-data="{ n: 1 }" x-show="n > 0"><span x-text="n"#;
        let items = resolve(text, None).await;
        assert_eq!(labels(&items), vec!["n"]);
    }
}
