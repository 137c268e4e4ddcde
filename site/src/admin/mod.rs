// Admin editor widgets

mod about_texts_form;

pub use about_texts_form::AboutTextsForm;
