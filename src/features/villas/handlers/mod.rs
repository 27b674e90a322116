pub mod villa_handler;

pub use villa_handler::{
    __path_create_villa, __path_delete_villa, __path_get_villa, __path_list_villas,
    __path_patch_villa, __path_replace_villa, create_villa, delete_villa, get_villa, list_villas,
    patch_villa, replace_villa,
};
