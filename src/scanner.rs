//! Per-file scan: track the enclosing class and collect exported methods.
//!
//! The class tracker is flat. Each `public ... class Name` line replaces the
//! current class, so members of a nested class that follow the nested
//! declaration are attributed to the nested class, and so is anything after
//! it in the outer one.

use crate::config::GeneratorConfig;
use crate::docs::extract_doc;
use crate::model::{DeclarationModel, MethodFragment};
use crate::signature::assemble;
use regex::Regex;
use std::sync::LazyLock;

static RE_CLASS_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bclass\s+(\w+)").unwrap());

pub struct Scanner<'a> {
    config: &'a GeneratorConfig,
    marker: String,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            config,
            marker: config.export_marker(),
        }
    }

    /// Scan one source file into `model`. Returns the number of methods recorded.
    pub fn scan(&self, source: &str, model: &mut DeclarationModel) -> usize {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        let lines: Vec<&str> = source.lines().collect();
        let mut current_class: Option<String> = None;
        let mut recorded = 0;

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i].trim();

            if line.starts_with("namespace") && !line.contains(&self.config.namespace) {
                tracing::debug!(line = i + 1, "namespace mismatch, skipping rest of file");
                break;
            }

            if line.starts_with("public") {
                if let Some(name) = class_name(line) {
                    current_class = Some(name);
                }
            }

            if !line.contains(&self.marker) {
                i += 1;
                continue;
            }
            let Some(class) = current_class.as_deref() else {
                tracing::debug!(line = i + 1, "export outside of a class, skipped");
                i += 1;
                continue;
            };

            let doc = extract_doc(&lines, i);
            let (signature, last) = assemble(&lines, i + 1);
            match signature {
                Some(signature) => {
                    tracing::debug!(
                        class,
                        method = %signature.name,
                        is_async = signature.is_async,
                        "exported"
                    );
                    model.record(class, MethodFragment { doc, signature });
                    recorded += 1;
                }
                None => tracing::debug!(line = i + 1, "could not assemble exported signature"),
            }
            i = last + 1;
        }

        recorded
    }
}

fn class_name(line: &str) -> Option<String> {
    RE_CLASS_NAME
        .captures(line)
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> DeclarationModel {
        let config = GeneratorConfig::default();
        let mut model = DeclarationModel::new();
        Scanner::new(&config).scan(source, &mut model);
        model
    }

    fn signatures(model: &DeclarationModel, class: &str) -> Vec<String> {
        model
            .get(class)
            .map(|entry| {
                entry
                    .methods
                    .iter()
                    .map(|m| m.signature.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn records_exported_method_under_its_class() {
        let source = "\
namespace VoxelML.Interop {
    public static partial class MathApi {
        [JSExport]
        public static int Add(int a, int b) {
            return a + b;
        }

        public static int Hidden(int a) {
            return a;
        }
    }
}
";
        let model = scan(source);
        assert_eq!(signatures(&model, "MathApi"), vec!["Add(a: number, b: number): number;"]);
        assert_eq!(model.method_count(), 1);
    }

    #[test]
    fn export_before_any_class_is_skipped() {
        let source = "\
namespace VoxelML;
[JSExport]
public static int Orphan() {
}
public class Later {
}
";
        let model = scan(source);
        assert!(model.is_empty());
    }

    #[test]
    fn namespace_mismatch_stops_scanning() {
        let source = "\
namespace Other.Stuff {
    public class Api {
        [JSExport]
        public static void Run() {
        }
    }
}
";
        assert!(scan(source).is_empty());
    }

    #[test]
    fn mismatch_after_matching_namespace_truncates() {
        let source = "\
namespace VoxelML {
    public class First {
        [JSExport]
        public static void A() {}
    }
}
namespace Elsewhere {
    public class Second {
        [JSExport]
        public static void B() {}
    }
}
";
        let model = scan(source);
        assert_eq!(signatures(&model, "First"), vec!["A(): void;"]);
        assert!(model.get("Second").is_none());
    }

    #[test]
    fn last_class_declaration_wins() {
        let source = "\
public class Outer {
    public class Inner {
        [JSExport]
        public static void InInner() {}
    }
    [JSExport]
    public static void BackInOuter() {}
}
";
        let model = scan(source);
        assert!(model.get("Outer").is_none());
        assert_eq!(
            signatures(&model, "Inner"),
            vec!["InInner(): void;", "BackInOuter(): void;"]
        );
    }

    #[test]
    fn public_member_mentioning_class_keeps_current_class() {
        let source = "\
public class Registry {
    public int classCount;
    [JSExport]
    public static int Count() { return 0; }
}
";
        let model = scan(source);
        assert_eq!(signatures(&model, "Registry"), vec!["Count(): number;"]);
    }

    #[test]
    fn consecutive_exports_are_independent() {
        let source = "\
public class Api {
    [JSExport]
    public static void One() {}
    [JSExport]
    public static void Two() {}
    [JSExport]
    public static void Three() {}
}
";
        let model = scan(source);
        assert_eq!(
            signatures(&model, "Api"),
            vec!["One(): void;", "Two(): void;", "Three(): void;"]
        );
    }

    #[test]
    fn malformed_signature_does_not_stop_scan() {
        let source = "\
public class Api {
    [JSExport]
    public int Property { get; }
    [JSExport]
    public static bool Ok() {}
}
";
        let model = scan(source);
        assert_eq!(signatures(&model, "Api"), vec!["Ok(): boolean;"]);
    }

    #[test]
    fn doc_precedes_signature() {
        let source = "\
public class Api {
    /// <summary>Says hello.</summary>
    /// <param name=\"name\">Who to greet.</param>
    [JSExport]
    public static string Greet(string name) {}
    [JSExport]
    public static void Quiet() {}
}
";
        let model = scan(source);
        let methods = &model.get("Api").unwrap().methods;
        let doc = methods[0].doc.as_ref().unwrap();
        assert_eq!(doc.indent, "    ");
        assert_eq!(doc.lines, vec!["Says hello.", "@param name Who to greet."]);
        assert!(methods[1].doc.is_none());
    }

    #[test]
    fn same_class_in_two_files_merges() {
        let config = GeneratorConfig::default();
        let scanner = Scanner::new(&config);
        let mut model = DeclarationModel::new();
        scanner.scan("public partial class Api {\n[JSExport]\npublic static void A() {}\n}", &mut model);
        scanner.scan("public partial class Api {\n[JSExport]\npublic static void B() {}\n}", &mut model);
        assert_eq!(model.len(), 1);
        assert_eq!(signatures(&model, "Api"), vec!["A(): void;", "B(): void;"]);
    }

    #[test]
    fn class_context_resets_per_file() {
        let config = GeneratorConfig::default();
        let scanner = Scanner::new(&config);
        let mut model = DeclarationModel::new();
        scanner.scan("public class Api {\n}", &mut model);
        let recorded = scanner.scan("[JSExport]\npublic static void A() {}", &mut model);
        assert_eq!(recorded, 0);
        assert!(model.is_empty());
    }

    #[test]
    fn byte_order_mark_and_crlf() {
        let source = "\u{feff}namespace Other;\r\npublic class Api {\r\n[JSExport]\r\npublic static void A() {}\r\n}\r\n";
        assert!(scan(source).is_empty());

        let source = "\u{feff}public class Api {\r\n[JSExport]\r\npublic static void A() {}\r\n}\r\n";
        assert_eq!(signatures(&scan(source), "Api"), vec!["A(): void;"]);
    }
}
