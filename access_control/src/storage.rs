use soroban_sdk::contracttype;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,       // owner - transfers itself, manages authorities
    Authorities, // minters
}
