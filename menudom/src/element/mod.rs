mod content;
mod node;

pub use content::Content;
pub use node::{Display, Element, Tag};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// IDs from `root` down to the element with `id`, both inclusive.
pub fn path_to(root: &Element, id: &str) -> Option<Vec<String>> {
    if root.id == id {
        return Some(vec![root.id.clone()]);
    }

    for child in root.content.children() {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, root.id.clone());
            return Some(path);
        }
    }

    None
}

/// Pre-order walk, calling `visit` on every element including `root`.
pub fn walk<'a>(root: &'a Element, visit: &mut impl FnMut(&'a Element)) {
    visit(root);
    for child in root.content.children() {
        walk(child, visit);
    }
}

/// Detach the element with `id` from beneath `root`. The root itself is never removed.
pub fn remove_element(root: &mut Element, id: &str) -> Option<Element> {
    let Content::Children(children) = &mut root.content else {
        return None;
    };

    if let Some(index) = children.iter().position(|c| c.id == id) {
        return Some(children.remove(index));
    }

    children.iter_mut().find_map(|child| remove_element(child, id))
}

/// Replace the element with `id` beneath `root` by `replacement`, returning the old element.
/// Hands `replacement` back when no such element exists.
pub fn replace_element(root: &mut Element, id: &str, replacement: Element) -> Result<Element, Element> {
    let mut slot = Some(replacement);
    let replaced = replace_in(root, id, &mut slot);
    match (replaced, slot) {
        (Some(old), _) => Ok(old),
        (None, Some(replacement)) => Err(replacement),
        (None, None) => unreachable!("replacement is only consumed on success"),
    }
}

fn replace_in(root: &mut Element, id: &str, slot: &mut Option<Element>) -> Option<Element> {
    let Content::Children(children) = &mut root.content else {
        return None;
    };

    if let Some(index) = children.iter().position(|c| c.id == id) {
        let replacement = slot.take()?;
        return Some(std::mem::replace(&mut children[index], replacement));
    }

    children.iter_mut().find_map(|child| replace_in(child, id, slot))
}
