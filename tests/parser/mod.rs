mod tests_grammar;
mod tests_visitor;
