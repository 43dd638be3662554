//! One schema file → one [`ModelDescriptor`].
use std::path::Path;
use chrono::{Datelike, NaiveDate};
use serde_json::Value;

use crate::config::{GenConfig, HeaderConfig};
use crate::error::SkipReason;
use crate::extends::compose_extends;
use crate::extract::extract_properties;
use crate::ir::{Header, ModelDescriptor};
use crate::resolve::{model_type_name, TypeResolver};
use crate::schema::json_kind;

pub struct ModelBuilder<'a> {
    config: &'a GenConfig,
    /// directory of the schema file, for deep `$ref` resolution
    schema_dir: Option<&'a Path>,
    today: NaiveDate,
}

impl<'a> ModelBuilder<'a> {
    pub fn new(config: &'a GenConfig) -> Self {
        Self { config, schema_dir: None, today: chrono::Local::now().date_naive() }
    }

    pub fn with_schema_dir(mut self, dir: &'a Path) -> Self {
        self.schema_dir = Some(dir);
        self
    }

    /// Pin the date used in the header.
    pub fn with_date(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    fn resolver(&self) -> TypeResolver<'a> {
        let resolver = TypeResolver::new(self.config);
        match self.schema_dir {
            Some(dir) => resolver.with_base_dir(dir),
            None => resolver,
        }
    }

    /// `file_name` is the file stem the model is named after.
    pub fn build(&self, file_name: &str, schema: &Value) -> Result<ModelDescriptor, SkipReason> {
        let kind = schema.get("type");
        if kind.and_then(Value::as_str) != Some("object") {
            let found = match kind {
                Some(Value::String(s)) => format!("`{s}`"),
                Some(other) => json_kind(other).to_string(),
                None => "no type".to_string(),
            };
            return Err(SkipReason::NotAnObject { found });
        }
        let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
            return Err(SkipReason::MissingProperties);
        };

        let resolver = self.resolver();
        let super_class = self.super_class(&resolver, schema);
        let composition = compose_extends(
            super_class.as_deref(),
            &self.config.inherits,
            &self.config.protocols,
            self.config.use_struct,
        );

        Ok(ModelDescriptor {
            model_name: model_type_name(self.config, file_name),
            properties: extract_properties(&resolver, properties, schema.get("required")),
            extends_list: composition.extends,
            has_super_class: super_class.is_some(),
            is_struct: self.config.use_struct,
            header: self.config.header.as_ref().map(|h| header_for(h, self.today)),
        })
    }

    fn super_class(&self, resolver: &TypeResolver<'_>, schema: &Value) -> Option<String> {
        if !self.config.enable_extends {
            return None;
        }
        let node = schema.get("extends")?;
        match resolver.resolve(node) {
            Ok(ty) => Some(ty.type_name),
            Err(error) => {
                tracing::warn!("`extends` ignored: {error}");
                None
            }
        }
    }
}

/// Header block values; absent fields become `<PROJECT>`, `<AUTHOR>`, `<COMPANY>`.
pub fn header_for(config: &HeaderConfig, today: NaiveDate) -> Header {
    Header {
        project_name: config.project.clone().unwrap_or_else(|| "<PROJECT>".into()),
        author: config.author.clone().unwrap_or_else(|| "<AUTHOR>".into()),
        now: today.format("%d/%m/%y").to_string(),
        copyright: format!(
            "{} {}",
            today.year(),
            config.company.as_deref().unwrap_or("<COMPANY>"),
        ),
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
