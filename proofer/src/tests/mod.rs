// Parser tests
mod formula_parsing;

// Formula model tests
mod rendering;
