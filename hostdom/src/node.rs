use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Handle to a node stored in a [`crate::Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Element kinds the document knows how to hold and serialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Body,
    Div,
    /// `<input type="checkbox">`
    Checkbox,
    Select,
    Option,
}

impl Tag {
    /// Markup name of the tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Div => "div",
            Self::Checkbox => "input",
            Self::Select => "select",
            Self::Option => "option",
        }
    }

    fn id_prefix(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Div => "div",
            Self::Checkbox => "checkbox",
            Self::Select => "select",
            Self::Option => "option",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<NodeId>),
}

#[derive(Debug, Clone)]
pub struct Node {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Content
    pub content: Content,

    // Attributes
    pub classes: Vec<String>,
    pub value: String,
    pub checked: bool,
    /// Rendered with `display: none`.
    pub hidden: bool,

    pub(crate) parent: Option<NodeId>,
}

impl Node {
    pub fn new(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.id_prefix()),
            tag,
            content: Content::None,
            classes: Vec::new(),
            value: String::new(),
            checked: false,
            hidden: false,
            parent: None,
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn checkbox() -> Self {
        Self::new(Tag::Checkbox)
    }

    pub fn select() -> Self {
        Self::new(Tag::Select)
    }

    /// An `<option>` carrying a value and its display text.
    pub fn option(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(Tag::Option).value(value).text(text)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Attributes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Replace the content with a text run.
    ///
    /// Only valid on a detached node; use [`crate::Document::set_text`] once
    /// the node lives in a document so existing children get detached.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }



    pub fn children(&self) -> &[NodeId] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}
