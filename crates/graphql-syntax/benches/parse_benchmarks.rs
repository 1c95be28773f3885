use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use graphql_syntax::parse;
use graphql_syntax::parse_with_options;
use graphql_syntax::GraphQLSource;
use graphql_syntax::ParseOptions;
use std::fmt::Write;

const INTROSPECTION_LIKE_QUERY: &str = r#"
query IntrospectionLikeQuery($includeDeprecated: Boolean = false) {
  schema: meta {
    types {
      name
      kind
      fields(includeDeprecated: $includeDeprecated) {
        name
        args {
          name
          type { name ofType { name ofType { name } } }
          defaultValue
        }
      }
    }
  }
}

fragment typeRef on Type {
  kind
  name
  ofType { kind name }
}
"#;

/// Generates a query with deeply nested selection sets.
fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 24);
    out.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        writeln!(out, "{indent}child {{").unwrap();
        writeln!(out, "{indent}  id").unwrap();
    }
    let inner_indent = "  ".repeat(depth + 1);
    writeln!(out, "{inner_indent}name").unwrap();
    for level in (0..depth).rev() {
        let indent = "  ".repeat(level + 1);
        writeln!(out, "{indent}}}").unwrap();
    }
    out.push_str("}\n");
    out
}

/// Generates a document containing `count` named query operations.
fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 96);
    for i in 0..count {
        writeln!(out, "query Operation{i}($id: ID!, $first: Int = 10) {{").unwrap();
        writeln!(out, "  node(id: $id) {{").unwrap();
        writeln!(out, "    id").unwrap();
        writeln!(out, "    items(first: $first) {{ id name }}").unwrap();
        writeln!(out, "  }}").unwrap();
        writeln!(out, "}}").unwrap();
    }
    out
}

fn query_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_parse");

    group.bench_function("introspection-like", |b| {
        let source = GraphQLSource::new(INTROSPECTION_LIKE_QUERY);
        b.iter(|| black_box(parse(&source)))
    });

    group.bench_function("deeply nested (64)", |b| {
        let source = GraphQLSource::new(deeply_nested_query(64));
        b.iter(|| black_box(parse(&source)))
    });

    group.bench_function("many operations (200)", |b| {
        let source = GraphQLSource::new(many_operations(200));
        b.iter(|| black_box(parse(&source)))
    });

    group.finish();
}

fn parse_options(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_options");
    let source = GraphQLSource::new(many_operations(200));

    group.bench_function("with locations", |b| {
        b.iter(|| black_box(parse(&source)))
    });

    group.bench_function("no locations", |b| {
        let options = ParseOptions::new().no_location();
        b.iter(|| black_box(parse_with_options(&source, options)))
    });

    group.finish();
}

criterion_group!(benches, query_parse, parse_options);
criterion_main!(benches);
