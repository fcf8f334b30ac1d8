//! Instance and property references.

use crate::ast::{Identifier, InstanceRef, InstanceRefElement, Node, PropertyRef};
use crate::error::ParseError;
use crate::keywords::is_property_keyword;
use crate::parser::RdlParser;
use crate::token::RdlToken;

impl RdlParser<'_> {
    /// `instance_ref`: `name[index]` elements separated by `.`.
    pub(crate) fn parse_instance_ref(&mut self) -> Result<InstanceRef, ParseError> {
        let span = self.current_span();
        let mut elements = vec![self.parse_instance_ref_element()?];
        while self.eat(RdlToken::Dot) {
            elements.push(self.parse_instance_ref_element()?);
        }
        Ok(InstanceRef { elements, span })
    }

    fn parse_instance_ref_element(&mut self) -> Result<InstanceRefElement, ParseError> {
        let id = self.expect_id()?;
        let array = if self.eat(RdlToken::LeftBracket) {
            let index = self.parse_constant_expression()?;
            self.expect(RdlToken::RightBracket)?;
            Some(Box::new(index))
        } else {
            None
        };
        Ok(InstanceRefElement { id, array })
    }

    /// `property_ref`: `instance_ref -> property`.
    pub(crate) fn parse_property_ref(&mut self) -> Result<Node, ParseError> {
        let instance_ref = self.parse_instance_ref()?;
        self.expect(RdlToken::Arrow)?;
        let property = self.parse_property_name()?;
        Ok(Node::PropertyRef(PropertyRef {
            instance_ref,
            property,
        }))
    }

    /// An instance reference used as a primary, optionally followed by
    /// `-> property`.
    pub(crate) fn parse_reference(&mut self) -> Result<Node, ParseError> {
        let instance_ref = self.parse_instance_ref()?;
        if !self.eat(RdlToken::Arrow) {
            return Ok(Node::InstanceRef(instance_ref));
        }
        let property = self.parse_property_name()?;
        Ok(Node::PropertyRef(PropertyRef {
            instance_ref,
            property,
        }))
    }

    /// The property keywords `sw`, `hw`, `rclr`, `rset`, `woclr` and `woset`
    /// are accepted as-is; anything else must be a valid identifier.
    fn parse_property_name(&mut self) -> Result<Identifier, ParseError> {
        if self.at(RdlToken::Identifier) && is_property_keyword(self.current_text()) {
            let id = Identifier::keyword(self.current_text(), self.current_span());
            self.advance();
            return Ok(id);
        }
        self.expect_id()
    }
}
