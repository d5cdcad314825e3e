use soroban_sdk::{Env, String};
use soroban_token_sdk::metadata::TokenMetadata;
use soroban_token_sdk::TokenUtils;
use utils::bump::bump_instance;

pub fn read_decimal(e: &Env) -> u32 {
    read_metadata(e).decimal
}

pub fn read_name(e: &Env) -> String {
    read_metadata(e).name
}

pub fn read_symbol(e: &Env) -> String {
    read_metadata(e).symbol
}

fn read_metadata(e: &Env) -> TokenMetadata {
    bump_instance(e);
    TokenUtils::new(e).metadata().get_metadata()
}

pub fn write_metadata(e: &Env, metadata: TokenMetadata) {
    bump_instance(e);
    TokenUtils::new(e).metadata().set_metadata(&metadata);
}
