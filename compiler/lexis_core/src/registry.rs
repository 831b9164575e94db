//! Mapping rule types to token categories.
//!
//! A lexer's categories are the positions of its rules, so the mapping is
//! fixed by the rule tuple's type alone. [`CategoryRegistry`] records that
//! order as a small table of [`TypeId`]s, built without creating or
//! scanning any rule, so callers can name categories by rule type instead
//! of by numeric literal.

use std::any::{type_name, TypeId};

use smallvec::SmallVec;

/// Identity of one rule type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleType {
    id: TypeId,
    name: &'static str,
}

impl RuleType {
    /// Identity of `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        RuleType {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Returns `true` if this is the identity of `T`.
    #[inline]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// The [`TypeId`] of the rule type.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Full path of the rule type, as reported by [`type_name`].
    ///
    /// Diagnostics only: the format is not stable across compilers.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Last path segment of [`name`](Self::name), for non-generic rules.
    pub fn short_name(&self) -> &'static str {
        match self.name.rfind("::") {
            Some(index) if !self.name.contains('<') => &self.name[index + 2..],
            _ => self.name,
        }
    }
}

/// Rule tuples whose member types can be identified at run time.
pub trait RuleTypes {
    /// Visit each member type in category order.
    fn visit(visitor: &mut impl FnMut(RuleType));
}

macro_rules! impl_rule_types {
    ($($rule:ident),+) => {
        impl<$($rule: 'static),+> RuleTypes for ($($rule,)+) {
            fn visit(visitor: &mut impl FnMut(RuleType)) {
                $( visitor(RuleType::of::<$rule>()); )+
            }
        }
    };
}

impl_rule_types!(R0);
impl_rule_types!(R0, R1);
impl_rule_types!(R0, R1, R2);
impl_rule_types!(R0, R1, R2, R3);
impl_rule_types!(R0, R1, R2, R3, R4);
impl_rule_types!(R0, R1, R2, R3, R4, R5);
impl_rule_types!(R0, R1, R2, R3, R4, R5, R6);
impl_rule_types!(R0, R1, R2, R3, R4, R5, R6, R7);
impl_rule_types!(R0, R1, R2, R3, R4, R5, R6, R7, R8);
impl_rule_types!(R0, R1, R2, R3, R4, R5, R6, R7, R8, R9);
impl_rule_types!(R0, R1, R2, R3, R4, R5, R6, R7, R8, R9, R10);
impl_rule_types!(R0, R1, R2, R3, R4, R5, R6, R7, R8, R9, R10, R11);

/// Category table of one rule tuple type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryRegistry {
    entries: SmallVec<[RuleType; 8]>,
}

impl CategoryRegistry {
    /// Build the table for the rule tuple `R`.
    pub fn of<R: RuleTypes>() -> Self {
        let mut entries = SmallVec::new();
        R::visit(&mut |rule| entries.push(rule));
        CategoryRegistry { entries }
    }

    /// Number of categories.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no categories.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Category of rule type `T`.
    ///
    /// Returns `None` if `T` is not in the table, or if it occurs more
    /// than once and so names no single category.
    pub fn category_of<T: ?Sized + 'static>(&self) -> Option<usize> {
        let mut matches = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.is::<T>())
            .map(|(category, _)| category);
        let category = matches.next()?;
        matches.next().is_none().then_some(category)
    }

    /// Rule type at `category`.
    pub fn get(&self, category: usize) -> Option<&RuleType> {
        self.entries.get(category)
    }

    /// Type name of the rule at `category`.
    pub fn rule_name(&self, category: usize) -> Option<&'static str> {
        self.get(category).map(RuleType::name)
    }

    /// `(category, rule type)` pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &RuleType)> {
        self.entries.iter().enumerate()
    }
}
