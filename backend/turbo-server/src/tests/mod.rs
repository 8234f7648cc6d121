mod api;
mod templates;
