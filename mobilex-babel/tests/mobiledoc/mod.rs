mod import;
mod properties;
