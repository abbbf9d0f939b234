//! Form rendering module

mod enquiry_form;
mod field_renderer;

pub use enquiry_form::draw_enquiry_dialog;
