//! Declaration model accumulated across all scanned files.

use crate::docs::DocComment;
use crate::signature::MethodSignature;
use indexmap::IndexMap;

/// One exported method: its optional doc block and its signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodFragment {
    pub doc: Option<DocComment>,
    pub signature: MethodSignature,
}

/// Exported methods of one class, in encounter order.
#[derive(Debug, Default)]
pub struct ClassEntry {
    pub methods: Vec<MethodFragment>,
}

/// Class name → exported methods, in first-seen order.
///
/// Classes with the same name in different files share one entry. Duplicate
/// method names are kept as-is.
#[derive(Debug, Default)]
pub struct DeclarationModel {
    classes: IndexMap<String, ClassEntry>,
}

impl DeclarationModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a method to `class`, creating the entry on first use.
    pub fn record(&mut self, class: &str, fragment: MethodFragment) {
        self.classes
            .entry(class.to_string())
            .or_default()
            .methods
            .push(fragment);
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[cfg(test)]
    pub fn get(&self, class: &str) -> Option<&ClassEntry> {
        self.classes.get(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = (&str, &ClassEntry)> {
        self.classes.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Total number of recorded methods across all classes.
    pub fn method_count(&self) -> usize {
        self.classes.values().map(|entry| entry.methods.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(name: &str) -> MethodFragment {
        MethodFragment {
            doc: None,
            signature: MethodSignature {
                name: name.to_string(),
                params: String::new(),
                return_type: "void".to_string(),
                is_async: false,
            },
        }
    }

    #[test]
    fn preserves_class_insertion_order() {
        let mut model = DeclarationModel::new();
        model.record("Zeta", fragment("a"));
        model.record("Alpha", fragment("b"));
        model.record("Zeta", fragment("c"));

        let names: Vec<&str> = model.classes().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
        assert_eq!(model.len(), 2);
        assert_eq!(model.method_count(), 3);
    }

    #[test]
    fn duplicate_methods_are_kept() {
        let mut model = DeclarationModel::new();
        model.record("Math", fragment("Add"));
        model.record("Math", fragment("Add"));
        assert_eq!(model.get("Math").unwrap().methods.len(), 2);
    }

    #[test]
    fn starts_empty() {
        let model = DeclarationModel::new();
        assert!(model.is_empty());
        assert_eq!(model.method_count(), 0);
    }
}
