pub mod attributes;
pub mod backend;
pub mod bridge;
pub mod completion;
pub mod directives;
pub mod document;
pub mod events;
pub mod expression;
pub mod fragment;
pub mod lineindex;
pub mod magics;
pub mod matcher;
pub mod modifiers;
pub mod tsserver;
