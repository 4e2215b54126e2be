//! The shared walk behind measuring, encoding and decoding.
//!
//! For every record the driver builds one [`Node`] per field, resolves byte
//! order and length links, and hands each leaf to a [`Visitor`]. Records are
//! recursed into in declaration order, which is also the wire order.
//!
//! Length links are declared on the integer that carries the length
//! (`sizeof=<sibling>`). Two sides of the link are resolved differently:
//!
//! - the producer learns the sibling's live length before it is visited, by
//!   looking the sibling up in the full record, so position does not matter;
//! - the consumer learns the producer's value from a per-record scope table
//!   that is filled as producers are visited, so only producers declared
//!   earlier are seen. Decoding relies on this side.

use std::collections::HashMap;

use crate::{
    Config, Directives, Endian, Error, FieldDesc, FieldMut, FieldRef, Kind, Result, cold_path,
};

/// A field handle the driver can walk.
pub(crate) trait Handle: Sized {
    fn kind(&self) -> Kind;

    /// Live element count of a collection or byte length of text.
    fn live_len(&self) -> Option<usize>;

    /// The current value as an element count.
    fn count(&self) -> Option<u64>;

    /// Type name of a field without a wire representation.
    fn unsupported(&self) -> Option<&'static str>;

    /// Splits a record handle into its schema and field handles.
    fn into_shape(self) -> Shape<Self>;
}

pub(crate) enum Shape<H> {
    Record(&'static [FieldDesc], Vec<H>),
    Leaf(H),
}

/// One field during one traversal.
pub(crate) struct Node<H> {
    pub name: &'static str,
    pub value: H,
    /// Resolved byte order.
    pub order: Endian,
    pub null_terminated: bool,
    /// Set on length producers: the live length of the linked sibling.
    pub linked_len: Option<usize>,
    /// Set on length consumers: the value of an already visited producer.
    pub length: Option<u64>,
}

impl<H> Node<H> {
    fn root(value: H, order: Endian) -> Self {
        Self {
            name: "<root>",
            value,
            order,
            null_terminated: false,
            linked_len: None,
            length: None,
        }
    }
}

/// The per-leaf behaviour of a traversal.
pub(crate) trait Visitor<H: Handle> {
    fn config(&self) -> &Config;

    fn visit(&mut self, node: &mut Node<H>) -> Result<()>;
}

/// Length producers registered while walking one record, keyed by the name
/// of the field they size. A later declaration for the same name wins.
#[derive(Default)]
struct Scope {
    lengths: HashMap<&'static str, u64>,
}

/// Walks `root` with `visitor`, using `order` wherever no directive overrides it.
pub(crate) fn run<H, V>(visitor: &mut V, root: H, order: Endian) -> Result<()>
where
    H: Handle,
    V: Visitor<H>,
{
    match root.into_shape() {
        Shape::Record(schema, fields) => walk_record(visitor, schema, fields, order),
        Shape::Leaf(value) => {
            check_supported(&value)?;
            visitor.visit(&mut Node::root(value, order))
        }
    }
}

fn walk_record<H, V>(
    visitor: &mut V,
    schema: &'static [FieldDesc],
    fields: Vec<H>,
    order: Endian,
) -> Result<()>
where
    H: Handle,
    V: Visitor<H>,
{
    if schema.len() != fields.len() {
        cold_path();
        return Err(Error::SchemaMismatch {
            schema: schema.len(),
            fields: fields.len(),
        });
    }

    let strict = visitor.config().strict_directives;
    let directives = schema
        .iter()
        .map(|desc| Directives::parse_with(desc.tag, strict))
        .collect::<Result<Vec<_>>>()?;

    // producers read their sibling's length from the whole record up front
    let mut linked = Vec::with_capacity(fields.len());
    for (desc, directive) in schema.iter().zip(&directives) {
        linked.push(match directive.size_of {
            Some(target) => Some(linked_len(schema, &fields, desc, target)?),
            None => None,
        });
    }

    let mut scope = Scope::default();
    for (((desc, directive), value), linked_len) in
        schema.iter().zip(directives).zip(fields).zip(linked)
    {
        let order = directive.order.unwrap_or(order);
        tracing::trace!(field = desc.name, kind = %value.kind(), ?order, "visiting field");

        let value = match value.into_shape() {
            Shape::Record(nested, children) => {
                if directive.size_of.is_some() {
                    cold_path();
                    return Err(Error::InvalidLengthSource(desc.name));
                }
                walk_record(visitor, nested, children, order)?;
                continue;
            }
            Shape::Leaf(value) => value,
        };

        check_supported(&value)?;
        if directive.size_of.is_some() && !value.kind().is_integer() {
            cold_path();
            return Err(Error::InvalidLengthSource(desc.name));
        }

        let mut node = Node {
            name: desc.name,
            value,
            order,
            null_terminated: directive.null_terminated,
            linked_len,
            length: scope.lengths.get(desc.name).copied(),
        };
        visitor.visit(&mut node)?;

        if let (Some(target), Some(count)) = (directive.size_of, node.value.count()) {
            scope.lengths.insert(target, count);
        }
    }
    Ok(())
}

fn linked_len<H: Handle>(
    schema: &'static [FieldDesc],
    fields: &[H],
    desc: &FieldDesc,
    target: &'static str,
) -> Result<usize> {
    schema
        .iter()
        .position(|sibling| sibling.name == target)
        .and_then(|index| fields.get(index))
        .and_then(Handle::live_len)
        .ok_or_else(|| {
            cold_path();
            Error::InvalidLengthTarget {
                field: desc.name,
                target: target.to_owned(),
            }
        })
}

fn check_supported<H: Handle>(value: &H) -> Result<()> {
    match value.unsupported() {
        Some(name) => {
            cold_path();
            Err(Error::UnsupportedKind(name))
        }
        None => Ok(()),
    }
}

impl Handle for FieldRef<'_> {
    fn kind(&self) -> Kind {
        FieldRef::kind(self)
    }

    fn live_len(&self) -> Option<usize> {
        FieldRef::live_len(self)
    }

    fn count(&self) -> Option<u64> {
        FieldRef::count(self)
    }

    fn unsupported(&self) -> Option<&'static str> {
        match self {
            FieldRef::Unsupported(name) => Some(*name),
            _ => None,
        }
    }

    fn into_shape(self) -> Shape<Self> {
        match self {
            FieldRef::Record(record) => Shape::Record(record.schema(), record.fields()),
            leaf => Shape::Leaf(leaf),
        }
    }
}

impl Handle for FieldMut<'_> {
    fn kind(&self) -> Kind {
        FieldMut::kind(self)
    }

    fn live_len(&self) -> Option<usize> {
        self.to_ref().live_len()
    }

    fn count(&self) -> Option<u64> {
        self.to_ref().count()
    }

    fn unsupported(&self) -> Option<&'static str> {
        match self {
            FieldMut::Unsupported(name) => Some(*name),
            _ => None,
        }
    }

    fn into_shape(self) -> Shape<Self> {
        match self {
            FieldMut::Record(record) => Shape::Record(record.schema(), record.fields_mut()),
            leaf => Shape::Leaf(leaf),
        }
    }
}
