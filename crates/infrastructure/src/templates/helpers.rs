//! Naming helpers exposed to templates.
//!
//! Each helper takes one string and returns a string, so they compose as
//! subexpressions: `{{upper (snake_case name)}}`.

use cgen_domain::naming;
use handlebars::{Handlebars, handlebars_helper};

handlebars_helper!(Upper: |s: str| naming::upper(s));
handlebars_helper!(SnakeCase: |s: str| naming::snake_case(s));
handlebars_helper!(CamelCase: |s: str| naming::camel_case(s));
handlebars_helper!(PascalCase: |s: str| naming::pascal_case(s));
handlebars_helper!(HeaderGuard: |s: str| naming::header_guard(s));

/// Registers every naming helper under its template name.
pub fn register_naming_helpers(registry: &mut Handlebars<'_>) {
    registry.register_helper("upper", Box::new(Upper));
    registry.register_helper("snake_case", Box::new(SnakeCase));
    registry.register_helper("camel_case", Box::new(CamelCase));
    registry.register_helper("pascal_case", Box::new(PascalCase));
    registry.register_helper("header_guard", Box::new(HeaderGuard));
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn render(template: &str) -> String {
        let mut registry = Handlebars::new();
        register_naming_helpers(&mut registry);
        registry
            .render_template(template, &json!({"name": "MyModule", "file": "core/api.h"}))
            .unwrap()
    }

    #[test]
    fn test_each_helper() {
        assert_eq!(render("{{upper name}}"), "MYMODULE");
        assert_eq!(render("{{snake_case name}}"), "my_module");
        assert_eq!(render("{{camel_case \"init_all_things\"}}"), "initAllThings");
        assert_eq!(render("{{pascal_case \"init_all\"}}"), "InitAll");
        assert_eq!(render("{{header_guard file}}"), "CORE_API_H_");
    }

    #[test]
    fn test_helpers_nest() {
        assert_eq!(render("{{upper (snake_case name)}}"), "MY_MODULE");
        assert_eq!(render("{{pascal_case (snake_case name)}}"), "MyModule");
    }
}
