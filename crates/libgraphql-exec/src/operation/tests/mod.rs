mod alias_conflict_tests;
mod fragment_graph_tests;
mod parser_tests;
