// Instance storage accessors. Every generated function bumps the instance TTL
// before touching storage. The caller needs `bump_instance` and `Env` in scope.

#[doc(hidden)]
pub use paste::paste as __paste;

#[macro_export]
macro_rules! generate_instance_storage_setter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        $crate::storage::__paste! {
            pub fn [<set_ $attr_name>](e: &Env, $attr_name: &$data_type) {
                bump_instance(e);
                e.storage().instance().set(&$key, $attr_name)
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter_with_default {
    ($attr_name:ident, $key:expr, $data_type:ty, $default:expr) => {
        $crate::storage::__paste! {
            pub fn [<get_ $attr_name>](e: &Env) -> $data_type {
                bump_instance(e);
                e.storage().instance().get(&$key).unwrap_or($default)
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter_and_setter_with_default {
    ($attr_name:ident, $key:expr, $data_type:ty, $default:expr) => {
        $crate::generate_instance_storage_getter_with_default!(
            $attr_name, $key, $data_type, $default
        );
        $crate::generate_instance_storage_setter!($attr_name, $key, $data_type);
    };
}
