//! Augmentation plans
//!
//! A [`SourceAugmentationPlan`] lists the edits wiring one message extension
//! into its host bot class. An [`ExportPlan`] lists the re-exports added to
//! the client script barrel.

use crate::project::ComponentDescriptor;

/// Decorator marking a bot class
pub const HOST_MARKER: &str = "BotDeclaration";

/// Decorator marking a message extension field
pub const EXTENSION_MARKER: &str = "MessageExtensionDeclaration";

/// Library exporting both decorators
pub const HOST_LIBRARY: &str = "express-msteams-host";

/// Emitted verbatim above the generated field
pub const LINT_SUPPRESSION: &str = "// tslint:disable-next-line: variable-name";

/// What to do when a plan meets its own earlier output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReapplyPolicy {
    /// Skip the default import, field and statement when already present
    #[default]
    Guarded,
    /// Insert them again; named imports are still merged
    Repeat,
}

/// Selects the host class inside a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSelector {
    pub marker: String,
    /// Restrict to this class when several carry the marker
    pub class_name: Option<String>,
}

impl HostSelector {
    /// Human readable form used in diagnostics
    pub fn describe(&self) -> String {
        match &self.class_name {
            Some(name) => format!("@{} class {name}", self.marker),
            None => format!("@{}", self.marker),
        }
    }
}

/// Named bindings to merge into an import of `module`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEdit {
    pub module: String,
    pub names: Vec<String>,
}

/// A default import of the component itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultImportEdit {
    pub module: String,
    pub binding: String,
}

/// A decorated field holding the component instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    pub name: String,
    pub type_name: String,
    pub decorator: String,
    pub decorator_argument: String,
    /// Access modifier keyword, e.g. `private`
    pub visibility: String,
    pub doc: Option<String>,
}

impl FieldEdit {
    /// Lines of the declaration, without indentation
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(4);
        if let Some(doc) = &self.doc {
            lines.push(format!("/** {doc} */"));
        }
        lines.push(LINT_SUPPRESSION.to_string());
        lines.push(format!("@{}(\"{}\")", self.decorator, self.decorator_argument));
        lines.push(format!(
            "{} {}: {};",
            self.visibility,
            self.name,
            self.type_name
        ));
        lines
    }
}

/// A statement prepended to the constructor body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementEdit {
    /// Comment line placed above the statement
    pub comment: String,
    pub statement: String,
    /// Assignment target identifying an earlier insertion, e.g. `this._x`
    pub target: String,
}

impl StatementEdit {
    pub fn lines(&self) -> Vec<String> {
        vec![self.comment.clone(), self.statement.clone()]
    }
}

/// Ordered edits for one host file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAugmentationPlan {
    pub host: HostSelector,
    pub import: Option<ImportEdit>,
    pub default_import: Option<DefaultImportEdit>,
    pub field: Option<FieldEdit>,
    pub statement: Option<StatementEdit>,
    pub policy: ReapplyPolicy,
}

impl SourceAugmentationPlan {
    /// Plan wiring `component` into the bot class `host_class`
    pub fn for_component(component: &ComponentDescriptor, host_class: Option<&str>) -> Self {
        let field_name = component.field_name();
        let class_name = &component.class_name;

        Self {
            host: HostSelector {
                marker: HOST_MARKER.to_string(),
                class_name: host_class.map(str::to_string),
            },
            import: Some(ImportEdit {
                module: HOST_LIBRARY.to_string(),
                names: vec![EXTENSION_MARKER.to_string()],
            }),
            default_import: Some(DefaultImportEdit {
                module: component.import_specifier(),
                binding: class_name.clone(),
            }),
            field: Some(FieldEdit {
                name: field_name.clone(),
                type_name: class_name.clone(),
                decorator: EXTENSION_MARKER.to_string(),
                decorator_argument: component.name.clone(),
                visibility: "private".to_string(),
                doc: Some(format!("Local property for {class_name}")),
            }),
            statement: Some(StatementEdit {
                comment: format!("// Message extension {class_name}"),
                statement: format!("this.{field_name} = new {class_name}();"),
                target: format!("this.{field_name}"),
            }),
            policy: ReapplyPolicy::Guarded,
        }
    }

    pub fn with_policy(mut self, policy: ReapplyPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// One `export * from "..."` line and the comment above it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReExport {
    pub module: String,
    pub comment: String,
}

/// Re-exports appended to the client script barrel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPlan {
    pub exports: Vec<ReExport>,
}

impl ExportPlan {
    pub fn for_component(component: &ComponentDescriptor) -> Self {
        let comment = format!(
            "// Automatically added for the {} message extension",
            component.name
        );
        let exports = component
            .client_modules()
            .into_iter()
            .map(|module| ReExport {
                comment: if module.ends_with("Action") {
                    format!("{comment} action")
                } else {
                    comment.clone()
                },
                module,
            })
            .collect();
        Self { exports }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::HostKind;
    use crate::project::component::{ActionInput, ActionSettings};

    fn component() -> ComponentDescriptor {
        ComponentDescriptor::new("Weather", None, HostKind::Existing, "{{MICROSOFT_APP_ID}}")
            .unwrap()
    }

    #[test]
    fn test_plan_for_component() {
        let plan = SourceAugmentationPlan::for_component(&component(), Some("MyBot"));
        assert_eq!(plan.policy, ReapplyPolicy::Guarded);
        assert_eq!(plan.host.describe(), "@BotDeclaration class MyBot");

        let default_import = plan.default_import.unwrap();
        assert_eq!(default_import.module, "../weatherMessageExtension/WeatherMessageExtension");
        assert_eq!(default_import.binding, "WeatherMessageExtension");

        let statement = plan.statement.unwrap();
        assert_eq!(statement.comment, "// Message extension WeatherMessageExtension");
        assert_eq!(
            statement.statement,
            "this._weatherMessageExtension = new WeatherMessageExtension();"
        );
    }

    #[test]
    fn test_field_lines() {
        let plan = SourceAugmentationPlan::for_component(&component(), None);
        assert_eq!(
            plan.field.unwrap().lines(),
            vec![
                "/** Local property for WeatherMessageExtension */".to_string(),
                LINT_SUPPRESSION.to_string(),
                "@MessageExtensionDeclaration(\"weatherMessageExtension\")".to_string(),
                "private _weatherMessageExtension: WeatherMessageExtension;".to_string(),
            ]
        );
    }

    #[test]
    fn test_export_plan() {
        let plan = ExportPlan::for_component(&component());
        assert_eq!(
            plan.exports,
            vec![ReExport {
                module: "./weatherMessageExtension/WeatherMessageExtensionConfig".to_string(),
                comment: "// Automatically added for the weatherMessageExtension message extension"
                    .to_string(),
            }]
        );
    }

    #[test]
    fn test_export_plan_for_task_module_action() {
        let component = component().with_action(ActionSettings {
            input: ActionInput::TaskModule,
            ..ActionSettings::default()
        });
        let plan = ExportPlan::for_component(&component);
        assert_eq!(plan.exports.len(), 2);
        assert!(plan.exports[1].module.ends_with("WeatherMessageExtensionAction"));
        assert!(plan.exports[1].comment.ends_with("message extension action"));
    }
}
