use soroban_sdk::{Env, Symbol};

#[derive(Clone)]
pub enum Role {
    Admin,
    Authority,
}

impl Role {
    pub(crate) fn has_many_users(&self) -> bool {
        match self {
            Role::Admin => false,
            Role::Authority => true,
        }
    }
}

pub trait SymbolRepresentation {
    fn as_symbol(&self, e: &Env) -> Symbol;
}

impl SymbolRepresentation for Role {
    fn as_symbol(&self, e: &Env) -> Symbol {
        match self {
            Role::Admin => Symbol::new(&e, "Admin"),
            Role::Authority => Symbol::new(&e, "Authority"),
        }
    }
}
