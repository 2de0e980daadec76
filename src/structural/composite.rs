// Composite
//
// Leaves and composites share one interface, so a whole tree can be treated
// like a single node. Calling `method` on the root walks every node below it.
//
// Parents own their children through `Rc`. A child points back at its parent
// with a `Weak`, which is only used to find the parent when detaching and
// never keeps it alive.

use crate::error::{PatternError, Result};
use crate::example::{Category, PatternExample, RunContext, Transcript};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicUsize, Ordering};

// ============================================================================
// Example: Composite Pattern - Rc Children, Weak Parents
// ============================================================================

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Leaf,
    Composite,
}

#[derive(Debug)]
pub struct Component {
    id: usize,
    kind: ComponentKind,
    parent: RefCell<Weak<Component>>,
    components: RefCell<Vec<Rc<Component>>>,
}

impl Component {
    fn new(kind: ComponentKind) -> Rc<Self> {
        Rc::new(Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            kind,
            parent: RefCell::new(Weak::new()),
            components: RefCell::new(Vec::new()),
        })
    }

    pub fn leaf() -> Rc<Self> {
        Self::new(ComponentKind::Leaf)
    }

    pub fn composite() -> Rc<Self> {
        Self::new(ComponentKind::Composite)
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn parent(&self) -> Option<Rc<Component>> {
        self.parent.borrow().upgrade()
    }

    pub fn children(&self) -> Vec<Rc<Component>> {
        self.components.borrow().clone()
    }

    /// Moves `child` under `parent`, detaching it from any current parent first.
    pub fn attach(parent: &Rc<Component>, child: &Rc<Component>) -> Result<()> {
        if parent.kind == ComponentKind::Leaf {
            return Err(PatternError::invalid_attachment(format!(
                "leaf {} cannot hold components",
                parent.id
            )));
        }
        if Rc::ptr_eq(parent, child) || parent.is_descendant_of(child) {
            return Err(PatternError::invalid_attachment(format!(
                "attaching {} under {} would create a cycle",
                child.id, parent.id
            )));
        }

        Component::detach(child);
        *child.parent.borrow_mut() = Rc::downgrade(parent);
        parent.components.borrow_mut().push(Rc::clone(child));
        tracing::debug!(parent = parent.id, child = child.id, "attached component");
        Ok(())
    }

    /// Removes `child` from its parent. Returns `false` if it had none.
    pub fn detach(child: &Rc<Component>) -> bool {
        let Some(parent) = child.parent() else {
            return false;
        };
        parent
            .components
            .borrow_mut()
            .retain(|component| !Rc::ptr_eq(component, child));
        *child.parent.borrow_mut() = Weak::new();
        tracing::debug!(parent = parent.id, child = child.id, "detached component");
        true
    }

    fn is_descendant_of(&self, ancestor: &Rc<Component>) -> bool {
        let mut current = self.parent();
        while let Some(node) = current {
            if Rc::ptr_eq(&node, ancestor) {
                return true;
            }
            current = node.parent();
        }
        false
    }

    /// One line per node, pre-order.
    pub fn method(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.describe(&mut lines);
        lines
    }

    fn describe(&self, lines: &mut Vec<String>) {
        let parent_id = self
            .parent()
            .map_or_else(|| "None".to_string(), |parent| parent.id.to_string());

        match self.kind {
            ComponentKind::Leaf => {
                lines.push(format!("<Leaf>\t\tid:{}\tParent:\t{parent_id}", self.id));
            }
            ComponentKind::Composite => {
                let components = self.components.borrow();
                lines.push(format!(
                    "<Composite>\tid:{}\tParent:\t{parent_id}\tComponents:{}",
                    self.id,
                    components.len()
                ));
                for component in components.iter() {
                    component.describe(lines);
                }
            }
        }
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct CompositeExample;

impl PatternExample for CompositeExample {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "treat a tree of leaves and composites as a single component"
    }

    fn run(&self, _ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let leaf_a = Component::leaf();
        let leaf_b = Component::leaf();
        let composite_1 = Component::composite();
        let composite_2 = Component::composite();

        Component::attach(&composite_1, &leaf_a)?;
        Component::attach(&composite_1, &leaf_b)?;
        // moves leaf_a
        Component::attach(&composite_2, &leaf_a)?;
        Component::attach(&composite_1, &composite_2)?;

        let mut transcript = Transcript::new();
        transcript.extend(composite_1.method());
        Ok(transcript)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_sets_parent() {
        let root = Component::composite();
        let leaf = Component::leaf();
        Component::attach(&root, &leaf).unwrap();

        assert_eq!(leaf.parent().unwrap().id(), root.id());
        assert_eq!(root.children().len(), 1);
    }

    #[test]
    fn test_reattach_moves_child() {
        let first = Component::composite();
        let second = Component::composite();
        let leaf = Component::leaf();

        Component::attach(&first, &leaf).unwrap();
        Component::attach(&second, &leaf).unwrap();

        assert!(first.children().is_empty());
        assert_eq!(second.children().len(), 1);
        assert_eq!(leaf.parent().unwrap().id(), second.id());
    }

    #[test]
    fn test_detach() {
        let root = Component::composite();
        let leaf = Component::leaf();
        Component::attach(&root, &leaf).unwrap();

        assert!(Component::detach(&leaf));
        assert!(leaf.parent().is_none());
        assert!(root.children().is_empty());
        assert!(!Component::detach(&leaf));
    }

    #[test]
    fn test_invalid_attachments() {
        let root = Component::composite();
        let child = Component::composite();
        let leaf = Component::leaf();
        Component::attach(&root, &child).unwrap();

        assert!(Component::attach(&leaf, &root).is_err());
        assert!(Component::attach(&root, &root).is_err());
        assert!(Component::attach(&child, &root).is_err());
        // failed attach leaves the tree alone
        assert_eq!(child.parent().unwrap().id(), root.id());
    }

    #[test]
    fn test_parent_reference_does_not_keep_parent_alive() {
        let leaf = Component::leaf();
        {
            let root = Component::composite();
            Component::attach(&root, &leaf).unwrap();
            assert!(leaf.parent().is_some());
        }
        assert!(leaf.parent().is_none());
    }

    #[test]
    fn test_method_walks_every_node() {
        let leaf_a = Component::leaf();
        let leaf_b = Component::leaf();
        let composite_1 = Component::composite();
        let composite_2 = Component::composite();

        Component::attach(&composite_1, &leaf_a).unwrap();
        Component::attach(&composite_1, &leaf_b).unwrap();
        Component::attach(&composite_2, &leaf_a).unwrap();
        Component::attach(&composite_1, &composite_2).unwrap();

        let lines = composite_1.method();
        assert_eq!(
            lines,
            vec![
                format!("<Composite>\tid:{}\tParent:\tNone\tComponents:2", composite_1.id()),
                format!("<Leaf>\t\tid:{}\tParent:\t{}", leaf_b.id(), composite_1.id()),
                format!(
                    "<Composite>\tid:{}\tParent:\t{}\tComponents:1",
                    composite_2.id(),
                    composite_1.id()
                ),
                format!("<Leaf>\t\tid:{}\tParent:\t{}", leaf_a.id(), composite_2.id()),
            ]
        );
    }
}
