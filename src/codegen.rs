//! Swift source emission for a [`ModelDescriptor`].
use std::fmt::Write as _;

use crate::ir::{ModelDescriptor, PropertyDescriptor, OBJECT_MARKER};

const JSON_DICT: &str = "[String: AnyObject]";

#[derive(Default)]
pub struct Codegen {
    out: String,
}

impl Codegen {
    pub fn new() -> Self { Self::default() }

    pub fn into_string(self) -> String { self.out }

    pub fn emit(&mut self, model: &ModelDescriptor) {
        self.emit_header(model);
        self.emit_declaration(model);
        self.line("");
        self.line("  // MARK: - Properties");
        self.line("");
        for p in &model.properties {
            let optional = if p.required { "" } else { "?" };
            self.line(&format!("  var {}: {}{optional}", p.key, swift_type(p)));
        }
        self.line("");
        self.line("  // MARK: - Inits");
        self.line("");
        let required = if model.is_struct { "" } else { "required " };
        self.line(&format!("  {required}init?(json: {JSON_DICT}) {{"));
        for p in &model.properties {
            self.emit_assignment(p);
        }
        if model.has_super_class && !model.is_struct {
            self.line("    super.init(json: json)");
        }
        self.line("  }");
        self.line("");
        self.line("}");
    }

    fn emit_header(&mut self, model: &ModelDescriptor) {
        if let Some(header) = &model.header {
            self.line("//");
            self.line(&format!("//  {}.swift", model.model_name));
            self.line(&format!("//  {}", header.project_name));
            self.line("//");
            self.line(&format!("//  Created by {} on {}.", header.author, header.now));
            self.line(&format!("//  Copyright © {}. All rights reserved.", header.copyright));
            self.line("//");
        }
        self.line("//");
        self.line("//  This file has been generated, modify it at your own risks!");
        self.line("//");
        self.line("");
    }

    fn emit_declaration(&mut self, model: &ModelDescriptor) {
        let keyword = if model.is_struct { "struct" } else { "class" };
        let _ = write!(self.out, "{keyword} {}", model.model_name);
        if !model.extends_list.is_empty() {
            let _ = write!(self.out, ": {}", model.extends_list.join(", "));
        }
        self.line(" {");
    }

    fn emit_assignment(&mut self, p: &PropertyDescriptor) {
        let key = &p.key;
        let name = &p.ty.type_name;
        match (p.ty.is_reference, p.ty.is_array, p.required) {
            (true, false, true) => {
                self.line(&format!("    self.{key} = {name}(json: json[\"{key}\"] as! {JSON_DICT})!"));
            }
            (true, false, false) => {
                self.line(&format!("    if let {key} = json[\"{key}\"] as? {JSON_DICT} {{"));
                self.line(&format!("      self.{key} = {name}(json: {key})"));
                self.line("    }");
            }
            (true, true, true) => {
                self.line(&format!(
                    "    self.{key} = (json[\"{key}\"] as! [{JSON_DICT}]).compactMap {{ {name}(json: $0) }}"
                ));
            }
            (true, true, false) => {
                self.line(&format!("    if let {key} = json[\"{key}\"] as? [{JSON_DICT}] {{"));
                self.line(&format!("      self.{key} = {key}.compactMap {{ {name}(json: $0) }}"));
                self.line("    }");
            }
            (false, _, required) => {
                let cast = if required { "as!" } else { "as?" };
                self.line(&format!("    self.{key} = json[\"{key}\"] {cast} {}", swift_type(p)));
            }
        }
    }

    fn line(&mut self, s: &str) {
        self.out.push_str(s);
        self.out.push('\n');
    }
}

/// Convenience: render one model to a Swift source string.
pub fn render_swift(model: &ModelDescriptor) -> String {
    let mut cg = Codegen::new();
    cg.emit(model);
    cg.into_string()
}

fn swift_type(p: &PropertyDescriptor) -> String {
    let base = if !p.ty.is_reference && p.ty.type_name == OBJECT_MARKER {
        JSON_DICT
    } else {
        p.ty.type_name.as_str()
    };
    if p.ty.is_array { format!("[{base}]") } else { base.to_string() }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Header, TypeDescriptor};

    fn prop(key: &str, ty: TypeDescriptor, required: bool) -> PropertyDescriptor {
        PropertyDescriptor { key: key.into(), ty, required }
    }

    fn user() -> ModelDescriptor {
        ModelDescriptor {
            model_name: "User".into(),
            properties: vec![
                prop("name", TypeDescriptor::primitive("String"), true),
                prop("age", TypeDescriptor::primitive("Int"), false),
            ],
            extends_list: vec![],
            has_super_class: false,
            is_struct: false,
            header: None,
        }
    }

    #[test]
    fn renders_plain_class() {
        let src = render_swift(&user());
        let expected = "\
//
//  This file has been generated, modify it at your own risks!
//

class User {

  // MARK: - Properties

  var name: String
  var age: Int?

  // MARK: - Inits

  required init?(json: [String: AnyObject]) {
    self.name = json[\"name\"] as! String
    self.age = json[\"age\"] as? Int
  }

}
";
        assert_eq!(src, expected);
    }

    #[test]
    fn struct_has_no_required_init_or_super_call() {
        let model = ModelDescriptor {
            is_struct: true,
            has_super_class: true,
            extends_list: vec!["Base".into()],
            ..user()
        };
        let src = render_swift(&model);
        assert!(src.contains("struct User: Base {"));
        assert!(src.contains("\n  init?(json: [String: AnyObject]) {"));
        assert!(!src.contains("super.init"));
    }

    #[test]
    fn class_with_super_class_calls_super() {
        let model = ModelDescriptor {
            has_super_class: true,
            extends_list: vec!["A".into(), "B".into()],
            ..user()
        };
        let src = render_swift(&model);
        assert!(src.contains("class User: A, B {"));
        assert!(src.contains("    super.init(json: json)\n  }"));
    }

    #[test]
    fn references_and_arrays() {
        let model = ModelDescriptor {
            properties: vec![
                prop("home", TypeDescriptor::reference("Address"), true),
                prop("work", TypeDescriptor::reference("Address"), false),
                prop("tags", TypeDescriptor::array_of(Some(TypeDescriptor::primitive("String"))), false),
                prop("pets", TypeDescriptor::array_of(Some(TypeDescriptor::reference("Pet"))), true),
                prop("extra", TypeDescriptor::object_marker(), false),
                prop("misc", TypeDescriptor::array_of(None), false),
            ],
            ..user()
        };
        let src = render_swift(&model);
        assert!(src.contains("  var home: Address\n"));
        assert!(src.contains("  var tags: [String]?\n"));
        assert!(src.contains("  var pets: [Pet]\n"));
        assert!(src.contains("  var extra: [String: AnyObject]?\n"));
        assert!(src.contains("  var misc: [AnyObject]?\n"));
        assert!(src.contains("    self.home = Address(json: json[\"home\"] as! [String: AnyObject])!\n"));
        assert!(src.contains("    if let work = json[\"work\"] as? [String: AnyObject] {\n      self.work = Address(json: work)\n    }\n"));
        assert!(src.contains("    self.pets = (json[\"pets\"] as! [[String: AnyObject]]).compactMap { Pet(json: $0) }\n"));
        assert!(src.contains("    self.tags = json[\"tags\"] as? [String]\n"));
    }

    #[test]
    fn header_block() {
        let model = ModelDescriptor {
            header: Some(Header {
                project_name: "Shop".into(),
                author: "Me".into(),
                now: "07/03/26".into(),
                copyright: "2026 Acme".into(),
            }),
            ..user()
        };
        let src = render_swift(&model);
        assert!(src.starts_with("//\n//  User.swift\n//  Shop\n//\n//  Created by Me on 07/03/26.\n//  Copyright © 2026 Acme. All rights reserved.\n//\n//\n"));
    }
}
