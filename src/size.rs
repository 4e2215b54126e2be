use crate::{
    Config, Error, FieldRef, Result,
    ser::{check_terminable, length_value},
    traverse::{self, Node, Visitor},
};

/// Accumulates the encoded size of a value without writing anything.
///
/// Applies the same checks as the encoder, so measuring fails exactly
/// where encoding would.
pub(crate) struct LengthCalculator<'c> {
    config: &'c Config,
    pub size: usize,
}

impl<'c> LengthCalculator<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self { config, size: 0 }
    }

    fn add(&mut self, node: &Node<FieldRef<'_>>) -> Result<()> {
        match node.value {
            FieldRef::Scalar(scalar) => {
                let scalar = match node.linked_len {
                    Some(len) => length_value(node.name, scalar, len)?,
                    None => scalar,
                };
                self.size += scalar.kind().fixed_width().unwrap_or(0);
            }
            FieldRef::Array(seq) | FieldRef::Seq(seq) => match seq.element_width() {
                Some(width) => self.size += width * seq.len(),
                // elements differ in size, measure each one
                None => {
                    for element in seq.elements() {
                        traverse::run(self, element, node.order)?;
                    }
                }
            },
            FieldRef::Str(text) => {
                if node.null_terminated {
                    check_terminable(node.name, text)?;
                }
                self.size += text.len() + usize::from(node.null_terminated);
            }
            FieldRef::Record(record) => {
                traverse::run(self, FieldRef::Record(record), node.order)?
            }
            FieldRef::Unsupported(name) => return Err(Error::UnsupportedKind(name)),
        }
        Ok(())
    }
}

impl<'a> Visitor<FieldRef<'a>> for LengthCalculator<'_> {
    fn config(&self) -> &Config {
        self.config
    }

    fn visit(&mut self, node: &mut Node<FieldRef<'a>>) -> Result<()> {
        self.add(node)
    }
}
