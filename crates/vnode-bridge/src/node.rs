//! Source virtual-node structure.
//!
//! A source tree is what a JSX-style component model produces before
//! rendering: primitive leaves, host elements tagged with a markup name,
//! component elements tagged with a render function, fragments, plain lists,
//! and deferred values that resolve later.

use std::any::type_name;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use vnode_bridge_core::{PropValue, Props, CHILDREN_KEY};

/// A boxed future resolving to a source node
pub type DeferredFuture = Pin<Box<dyn Future<Output = SourceNode> + Send>>;

type RenderFn = dyn Fn(ComponentProps) -> SourceNode + Send + Sync;

/// A node in the source tree
#[derive(Debug, Clone, Default)]
pub enum SourceNode {
    /// `null` / `undefined`
    #[default]
    Absent,
    Text(String),
    Number(f64),
    Bool(bool),
    Element(Element),
    /// Ordered siblings
    List(Vec<SourceNode>),
    /// A value that resolves to a node asynchronously
    Deferred(Deferred),
}

impl SourceNode {
    /// Wrap a future as a deferred node
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = SourceNode> + Send + 'static,
    {
        SourceNode::Deferred(Deferred::new(future))
    }

    /// Check whether this node is falsy under loose truthiness
    /// (absent, `false`, `0`, `NaN` or the empty string)
    pub fn is_falsy(&self) -> bool {
        match self {
            SourceNode::Absent => true,
            SourceNode::Bool(b) => !b,
            SourceNode::Number(n) => *n == 0.0 || n.is_nan(),
            SourceNode::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, SourceNode::Absent)
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            SourceNode::Element(el) => Some(el),
            _ => None,
        }
    }
}

/// What an element is tagged with
#[derive(Debug, Clone)]
pub enum Tag {
    /// Markup tag name, e.g. "div"
    Host(String),
    /// Render function
    Component(Component),
    /// Tagless grouping (`<>...</>`)
    Fragment,
}

/// An element node with tag, props and children
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: Tag,
    pub props: Props,
    pub children: Vec<SourceNode>,
}

impl Element {
    /// Create a host element
    pub fn host(tag_name: &str) -> Self {
        Self::host_with_props(tag_name, Props::new())
    }

    /// Create a host element with attributes
    pub fn host_with_props(tag_name: &str, props: Props) -> Self {
        Self {
            tag: Tag::Host(tag_name.to_string()),
            props,
            children: Vec::new(),
        }
    }

    /// Create a component element
    pub fn component(component: Component) -> Self {
        Self::component_with_props(component, Props::new())
    }

    /// Create a component element with props
    pub fn component_with_props(component: Component, props: Props) -> Self {
        Self {
            tag: Tag::Component(component),
            props,
            children: Vec::new(),
        }
    }

    /// Create an empty fragment
    pub fn fragment() -> Self {
        Self {
            tag: Tag::Fragment,
            props: Props::new(),
            children: Vec::new(),
        }
    }

    /// Get the tag name for host elements
    pub fn tag_name(&self) -> Option<&str> {
        match &self.tag {
            Tag::Host(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_host(&self) -> bool {
        matches!(self.tag, Tag::Host(_))
    }

    pub fn is_component(&self) -> bool {
        matches!(self.tag, Tag::Component(_))
    }

    pub fn is_fragment(&self) -> bool {
        matches!(self.tag, Tag::Fragment)
    }

    /// Get a prop value by name
    pub fn prop(&self, name: &str) -> Option<&PropValue> {
        self.props.get(name)
    }

    /// Set a prop, replacing any previous value in place
    pub fn set_prop(&mut self, name: &str, value: impl Into<PropValue>) {
        self.props.insert(name.to_string(), value.into());
    }

    pub fn with_prop(mut self, name: &str, value: impl Into<PropValue>) -> Self {
        self.set_prop(name, value);
        self
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &SourceNode> {
        self.children.iter()
    }

    /// Add a child node
    pub fn add_child(&mut self, child: impl Into<SourceNode>) {
        self.children.push(child.into());
    }

    pub fn with_child(mut self, child: impl Into<SourceNode>) -> Self {
        self.add_child(child);
        self
    }

    /// Append several children, each as its own sibling
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SourceNode>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

/// The props a component function receives: its attributes plus the
/// element's children under the `children` key.
#[derive(Debug, Clone, Default)]
pub struct ComponentProps {
    props: Props,
    children: Vec<SourceNode>,
}

impl ComponentProps {
    /// Any `children` entry in `props` is replaced by `children`
    pub fn new(mut props: Props, children: Vec<SourceNode>) -> Self {
        props.shift_remove(CHILDREN_KEY);
        Self { props, children }
    }

    /// Get an attribute by name. Children are never stored here; use
    /// [`ComponentProps::children`] to reach them.
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.props.get(name)
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn children(&self) -> &[SourceNode] {
        &self.children
    }

    pub fn into_children(self) -> Vec<SourceNode> {
        self.children
    }
}

/// A named render function
#[derive(Clone)]
pub struct Component {
    name: Arc<str>,
    render: Arc<RenderFn>,
}

impl Component {
    /// Create a component with an explicit display name
    pub fn new<F>(name: &str, render: F) -> Self
    where
        F: Fn(ComponentProps) -> SourceNode + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            render: Arc::new(render),
        }
    }

    /// Create a component named after the function's type, as reported by
    /// [`std::any::type_name`] (closures end in `{{closure}}`)
    pub fn from_fn<F>(render: F) -> Self
    where
        F: Fn(ComponentProps) -> SourceNode + Send + Sync + 'static,
    {
        Self::new(type_name::<F>(), render)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the render function
    pub fn render(&self, props: ComponentProps) -> SourceNode {
        (self.render)(props)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Component").field(&self.name).finish()
    }
}

/// A pending node. The converter never polls it.
#[derive(Clone)]
pub struct Deferred(Arc<Mutex<Option<DeferredFuture>>>);

impl Deferred {
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = SourceNode> + Send + 'static,
    {
        Self(Arc::new(Mutex::new(Some(Box::pin(future)))))
    }

    /// Take the wrapped future out, leaving this value (and its clones) empty
    pub fn take(&self) -> Option<DeferredFuture> {
        self.0.lock().ok()?.take()
    }

    /// Check whether the future has not been taken yet
    pub fn is_pending(&self) -> bool {
        self.0.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }
}

impl fmt::Debug for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("pending", &self.is_pending())
            .finish()
    }
}

impl From<&str> for SourceNode {
    fn from(value: &str) -> Self {
        SourceNode::Text(value.to_string())
    }
}

impl From<String> for SourceNode {
    fn from(value: String) -> Self {
        SourceNode::Text(value)
    }
}

impl From<f64> for SourceNode {
    fn from(value: f64) -> Self {
        SourceNode::Number(value)
    }
}

impl From<i32> for SourceNode {
    fn from(value: i32) -> Self {
        SourceNode::Number(value.into())
    }
}

impl From<i64> for SourceNode {
    fn from(value: i64) -> Self {
        SourceNode::Number(value as f64)
    }
}

impl From<bool> for SourceNode {
    fn from(value: bool) -> Self {
        SourceNode::Bool(value)
    }
}

impl From<Element> for SourceNode {
    fn from(element: Element) -> Self {
        SourceNode::Element(element)
    }
}

impl From<Deferred> for SourceNode {
    fn from(deferred: Deferred) -> Self {
        SourceNode::Deferred(deferred)
    }
}

impl<T: Into<SourceNode>> From<Vec<T>> for SourceNode {
    fn from(nodes: Vec<T>) -> Self {
        SourceNode::List(nodes.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<SourceNode>> From<Option<T>> for SourceNode {
    fn from(value: Option<T>) -> Self {
        value.map_or(SourceNode::Absent, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vnode_bridge_core::props;

    #[test]
    fn test_create_host_element() {
        let div = Element::host("div").with_prop("id", "foo");
        assert!(div.is_host());
        assert_eq!(div.tag_name(), Some("div"));
        assert_eq!(div.prop("id").and_then(PropValue::as_str), Some("foo"));
        assert_eq!(div.prop("class"), None);
    }

    #[test]
    fn test_children() {
        let mut div = Element::host("div");
        div.add_child("Hello");
        div.add_child(Element::host("span"));
        div.add_child(42);

        assert_eq!(div.children().count(), 3);
        assert_eq!(
            div.children().filter(|c| c.as_element().is_some()).count(),
            1
        );
    }

    #[test]
    fn test_with_children_appends_siblings() {
        let ul = Element::host("ul")
            .with_child(Element::host("li"))
            .with_children(vec![Element::host("li"), Element::host("li")]);
        assert_eq!(ul.children.len(), 3);
    }

    #[test]
    fn test_set_prop_keeps_position() {
        let mut el = Element::host_with_props("a", props([("href", "/"), ("title", "x")]));
        el.set_prop("href", "/home");
        let keys: Vec<&str> = el.props.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["href", "title"]);
    }

    #[test]
    fn test_falsy_leaves() {
        assert!(SourceNode::Absent.is_falsy());
        assert!(SourceNode::from(false).is_falsy());
        assert!(SourceNode::from(0).is_falsy());
        assert!(SourceNode::from(f64::NAN).is_falsy());
        assert!(SourceNode::from("").is_falsy());
        assert!(!SourceNode::from("0").is_falsy());
        assert!(!SourceNode::from(true).is_falsy());
        assert!(!SourceNode::from(Vec::<SourceNode>::new()).is_falsy());
        assert!(!SourceNode::from(Element::fragment()).is_falsy());
    }

    #[test]
    fn test_option_conversion() {
        assert!(SourceNode::from(None::<&str>).is_absent());
        assert!(matches!(SourceNode::from(Some("x")), SourceNode::Text(_)));
    }

    #[test]
    fn test_component_props_children_take_precedence() {
        let props = ComponentProps::new(
            props([("children", "stale"), ("title", "t")]),
            vec![SourceNode::from("fresh")],
        );
        assert!(props.get("children").is_none());
        assert_eq!(props.get("title").and_then(PropValue::as_str), Some("t"));
        assert_eq!(props.children().len(), 1);
        assert!(matches!(&props.children()[0], SourceNode::Text(t) if t == "fresh"));
    }

    #[test]
    fn test_component_render() {
        let greeting = Component::new("Greeting", |props| {
            let name = props.get("name").and_then(PropValue::as_str).unwrap_or("");
            Element::host("p").with_child(format!("Hello {name}")).into()
        });
        assert_eq!(greeting.name(), "Greeting");
        assert_eq!(format!("{greeting:?}"), "Component(\"Greeting\")");

        let rendered = greeting.render(ComponentProps::new(props([("name", "Ada")]), Vec::new()));
        let p = rendered.as_element().unwrap();
        assert_eq!(p.tag_name(), Some("p"));
        assert!(matches!(&p.children[0], SourceNode::Text(t) if t == "Hello Ada"));
    }

    fn header(_: ComponentProps) -> SourceNode {
        Element::host("header").into()
    }

    #[test]
    fn test_from_fn_names_fn_items_by_path() {
        let component = Component::from_fn(header);
        assert!(component.name().ends_with("::header"));

        let el = Element::component(component);
        assert!(el.is_component());
        assert!(!el.is_host());
        assert_eq!(el.tag_name(), None);
    }

    #[test]
    fn test_from_fn_names_closures_by_enclosing_fn() {
        let component = Component::from_fn(|_| SourceNode::Absent);
        assert!(component.name().contains("test_from_fn_names_closures_by_enclosing_fn"));
        assert!(component.name().ends_with("{{closure}}"));
        assert!(component.render(ComponentProps::default()).is_absent());
    }

    #[test]
    fn test_fragment_element() {
        let fragment = Element::fragment().with_child("a");
        assert!(fragment.is_fragment());
        assert!(!fragment.is_component());
        assert_eq!(fragment.tag_name(), None);
    }

    #[test]
    fn test_deferred_take() {
        let deferred = Deferred::new(async { SourceNode::from("later") });
        let clone = deferred.clone();
        assert!(clone.is_pending());
        assert!(deferred.take().is_some());
        assert!(!clone.is_pending());
        assert!(clone.take().is_none());
    }

    #[test]
    fn test_source_node_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SourceNode>();
    }
}
