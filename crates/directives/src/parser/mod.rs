//! Directive parser
//!
//! Turns a [`DirectiveTable`] into the ordered scene-object sequence.
//! Directive groups are visited in [`DirectiveKind::ALL`] order and
//! instances within a group keep their declaration order. The first
//! invalid instance stops parsing; nothing is skipped.

mod tokens;


use tracing::{debug, trace};

pub use tokens::Tokens;

use crate::error::{DirectiveError, DirectiveErrorKind, Result};
use crate::scene::{Scene, SceneObject};
use crate::schema::{DirectiveSchema, SCHEMAS};
use crate::table::DirectiveTable;

/// Parse every multi-use directive in the table.
///
/// Names in the table that are not multi-use directives are left for other
/// layers and ignored here.
pub fn parse(table: &DirectiveTable) -> Result<Vec<SceneObject>> {
    let mut objects = Vec::new();
    for schema in &SCHEMAS {
        let instances = table.instances(schema.name());
        if instances.is_empty() {
            continue;
        }
        parse_group(schema, instances, &mut objects)?;
        debug!(
            directive = schema.name(),
            count = instances.len(),
            "directive group parsed"
        );
    }
    Ok(objects)
}

/// Parse the table into a [`Scene`].
pub fn parse_scene(table: &DirectiveTable) -> Result<Scene> {
    parse(table).map(Scene::from)
}

/// Parse a single instance of one directive.
pub fn parse_instance(schema: &DirectiveSchema, instance: &str) -> Result<SceneObject> {
    let raw: Vec<&str> = instance.split_whitespace().collect();
    schema
        .arity
        .check(&raw)
        .map_err(|kind| DirectiveError::new(schema.name(), &raw, kind))?;
    let mut tokens = Tokens::new(schema.name(), &raw);
    let object = (schema.build)(&mut tokens)?;
    trace!(directive = schema.name(), kind = object.kind_name(), "scene object built");
    Ok(object)
}

fn parse_group(
    schema: &DirectiveSchema,
    instances: &[String],
    objects: &mut Vec<SceneObject>,
) -> Result<()> {
    let over_cap = schema.max_instances.filter(|&max| instances.len() > max);
    if let Some(max) = over_cap {
        let raw: Vec<&str> = instances[max].split_whitespace().collect();
        return Err(DirectiveError::new(
            schema.name(),
            &raw,
            DirectiveErrorKind::TooManyInstances {
                max,
                found: instances.len(),
            },
        ));
    }
    for instance in instances {
        objects.push(parse_instance(schema, instance)?);
    }
    Ok(())
}
