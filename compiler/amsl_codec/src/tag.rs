//! Node tags.

use amsl_ir::ResolvedExpr;

/// Leading byte of every encoded node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Tag {
    List = 0,
    Call = 1,
    VarDecl = 2,
    Slot = 3,
    Assign = 4,
    Int = 5,
    Str = 6,
}

impl Tag {
    pub const fn from_byte(byte: u8) -> Option<Tag> {
        Some(match byte {
            0 => Tag::List,
            1 => Tag::Call,
            2 => Tag::VarDecl,
            3 => Tag::Slot,
            4 => Tag::Assign,
            5 => Tag::Int,
            6 => Tag::Str,
            _ => return None,
        })
    }

    pub const fn to_byte(self) -> u8 {
        self as u8
    }

    pub fn of(expr: &ResolvedExpr) -> Tag {
        match expr {
            ResolvedExpr::List(_) => Tag::List,
            ResolvedExpr::Call { .. } => Tag::Call,
            ResolvedExpr::VarDecl { .. } => Tag::VarDecl,
            ResolvedExpr::Slot(_) => Tag::Slot,
            ResolvedExpr::Assign { .. } => Tag::Assign,
            ResolvedExpr::Int(_) => Tag::Int,
            ResolvedExpr::Str(_) => Tag::Str,
        }
    }
}
