use crate::operation::DocumentFormatter;
use crate::operation::OperationKind;
use crate::selection::Argument;
use crate::selection::Directive;
use crate::selection::FieldSelection;
use crate::selection::InlineFragment;
use crate::selection::Selection;
use crate::tests::fixtures::object;
use crate::tests::fixtures::string;
use crate::Value;

fn leaf(name: &str) -> Selection {
    Selection::Field(FieldSelection {
        alias: None,
        arguments: vec![],
        directives: vec![],
        identity: 0,
        name: name.to_string(),
        selection_set: vec![],
    })
}

fn field(
    name: &str,
    identity: u64,
    arguments: Vec<Argument>,
    selection_set: Vec<Selection>,
) -> Selection {
    Selection::Field(FieldSelection {
        alias: None,
        arguments,
        directives: vec![],
        identity,
        name: name.to_string(),
        selection_set,
    })
}

fn format_query(
    use_variables: bool,
    drop_null_input_values: bool,
    selections: &[Selection],
) -> (String, Vec<(String, Value, String)>) {
    let (document, variables) =
        DocumentFormatter::new(use_variables, drop_null_input_values)
            .format_operation(OperationKind::Query, None, selections);
    let variables =
        variables.into_iter()
            .map(|(name, (value, type_name))| (name, value, type_name))
            .collect();
    (document, variables)
}

#[test]
fn inline_arguments() {
    let selections = vec![field(
        "posts",
        1,
        vec![
            Argument::new("first", 10, "Int"),
            Argument::new("after", "abc", "String"),
        ],
        vec![leaf("title")],
    )];

    let (document, variables) = format_query(false, false, &selections);
    assert_eq!(document, "query{posts(first:10,after:\"abc\"){title}}");
    assert!(variables.is_empty());
}

#[test]
fn hoisted_arguments() {
    let selections = vec![field(
        "posts",
        1,
        vec![
            Argument::new("first", 10, "Int"),
            Argument::new("after", "abc", "String"),
        ],
        vec![leaf("title")],
    )];

    let (document, variables) = format_query(true, false, &selections);
    assert_eq!(
        document,
        "query($first: Int,$after: String){posts(first:$first,after:$after){title}}",
    );
    assert_eq!(variables, vec![
        ("first".to_string(), Value::Int(10), "Int".to_string()),
        ("after".to_string(), string("abc"), "String".to_string()),
    ]);
}

#[test]
fn identical_values_share_a_variable() {
    let selections = vec![
        field("a", 1, vec![Argument::new("id", 7, "ID!")], vec![]),
        field("b", 2, vec![Argument::new("id", 7, "ID!")], vec![]),
    ];

    let (document, variables) = format_query(true, false, &selections);
    assert_eq!(document, "query($id: ID!){a(id:$id) b(id:$id)}");
    assert_eq!(variables.len(), 1);
}

#[test]
fn same_value_with_different_type_gets_a_new_variable() {
    let selections = vec![
        field("a", 1, vec![Argument::new("id", 7, "ID!")], vec![]),
        field("b", 2, vec![Argument::new("id", 7, "Int!")], vec![]),
    ];

    let (document, _) = format_query(true, false, &selections);
    assert_eq!(document, "query($id: ID!,$id1: Int!){a(id:$id) b(id:$id1)}");
}

#[test]
fn variable_suffixes_count_up() {
    let selections = vec![
        field("a", 1, vec![Argument::new("n", 1, "Int")], vec![]),
        field("b", 2, vec![Argument::new("n", 2, "Int")], vec![]),
        field("c", 3, vec![Argument::new("n", 3, "Int")], vec![]),
    ];

    let (document, variables) = format_query(true, false, &selections);
    assert_eq!(
        document,
        "query($n: Int,$n1: Int,$n2: Int){a(n:$n) b(n:$n1) c(n:$n2)}",
    );
    let names = variables.iter().map(|(name, _, _)| name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["n", "n1", "n2"]);
}

#[test]
fn seeded_variables_are_not_reused_for_other_values() {
    let mut seed = indexmap::IndexMap::new();
    seed.insert("id".to_string(), (Value::Int(1), "ID!".to_string()));

    let mut formatter = DocumentFormatter::new(true, false).with_variables(seed);
    let body = formatter.format_selection_set(&[
        field("user", 1, vec![Argument::new("id", 2, "ID!")], vec![leaf("name")]),
    ]);

    assert_eq!(body, "user(id:$id1){name}");
    assert_eq!(formatter.variables().len(), 2);

    let variables = formatter.into_variables();
    assert_eq!(variables.get_index(0), Some((&"id".to_string(), &(Value::Int(1), "ID!".to_string()))));
    assert_eq!(variables.get_index(1), Some((&"id1".to_string(), &(Value::Int(2), "ID!".to_string()))));
}

#[test]
fn null_fields_dropped_only_when_requested() {
    let input = object(vec![("name", string("x")), ("nick", Value::Null)]);
    let selections = vec![field(
        "update",
        1,
        vec![Argument::new("input", input, "UserInput!")],
        vec![],
    )];

    let (kept, _) = format_query(false, false, &selections);
    assert_eq!(kept, "query{update(input:{name:\"x\",nick:null})}");

    let (dropped, _) = format_query(false, true, &selections);
    assert_eq!(dropped, "query{update(input:{name:\"x\"})}");

    let (_, variables) = format_query(true, true, &selections);
    assert_eq!(variables[0].1, object(vec![("name", string("x"))]));
}

#[test]
fn top_level_null_argument_is_kept() {
    let selections = vec![field(
        "posts",
        1,
        vec![Argument::new("after", None::<String>, "String")],
        vec![leaf("title")],
    )];

    let (document, _) = format_query(false, true, &selections);
    assert_eq!(document, "query{posts(after:null){title}}");
}

#[test]
fn enum_and_list_literals() {
    let selections = vec![field(
        "users",
        1,
        vec![
            Argument::new("role", Value::Enum("ADMIN".to_string()), "Role"),
            Argument::new("ids", vec![1, 2, 3], "[ID!]"),
        ],
        vec![leaf("name")],
    )];

    let (document, _) = format_query(false, false, &selections);
    assert_eq!(document, "query{users(role:ADMIN,ids:[1,2,3]){name}}");
}

#[test]
fn directives_follow_arguments() {
    let selections = vec![Selection::Field(FieldSelection {
        alias: Some("me".to_string()),
        arguments: vec![Argument::new("id", 1, "ID!")],
        directives: vec![
            Directive::new("include")
                .with_argument(Argument::new("if", true, "Boolean!")),
            Directive::new("cached"),
        ],
        identity: 1,
        name: "user".to_string(),
        selection_set: vec![leaf("name")],
    })];

    let (inline, _) = format_query(false, false, &selections);
    assert_eq!(inline, "query{me:user(id:1) @include(if:true) @cached{name}}");

    let (hoisted, variables) = format_query(true, false, &selections);
    assert_eq!(
        hoisted,
        "query($id: ID!,$if: Boolean!){me:user(id:$id) @include(if:$if) @cached{name}}",
    );
    assert_eq!(variables[1].1, Value::Bool(true));
}

#[test]
fn inline_fragments() {
    let selections = vec![field(
        "search",
        1,
        vec![],
        vec![
            leaf("__typename"),
            Selection::InlineFragment(InlineFragment::new("User", vec![leaf("name")])),
            Selection::InlineFragment(InlineFragment::new("Post", vec![leaf("title")])),
        ],
    )];

    let (document, _) = format_query(false, false, &selections);
    assert_eq!(
        document,
        "query{search{__typename ... on User{name} ... on Post{title}}}",
    );
}

#[test]
fn colliding_siblings_are_disambiguated() {
    let selections = vec![
        field("user", 11, vec![Argument::new("id", 1, "ID!")], vec![leaf("name")]),
        field("user", 12, vec![Argument::new("id", 2, "ID!")], vec![leaf("name")]),
        leaf("viewer"),
    ];

    let (document, _) = format_query(false, false, &selections);
    assert_eq!(
        document,
        "query{user11:user(id:1){name} user12:user(id:2){name} viewer}",
    );
}

#[test]
fn aliased_collision_uses_the_alias() {
    let aliased = |identity| Selection::Field(FieldSelection {
        alias: Some("who".to_string()),
        arguments: vec![],
        directives: vec![],
        identity,
        name: "user".to_string(),
        selection_set: vec![leaf("name")],
    });

    let (document, _) = format_query(false, false, &[aliased(3), aliased(4)]);
    assert_eq!(document, "query{who3:user{name} who4:user{name}}");
}

#[test]
fn names_only_collide_within_one_level() {
    let selections = vec![
        field("a", 1, vec![], vec![leaf("id")]),
        field("b", 2, vec![], vec![leaf("id")]),
    ];

    let (document, _) = format_query(false, false, &selections);
    assert_eq!(document, "query{a{id} b{id}}");
}

#[test]
fn operation_header() {
    let selections = vec![field("like", 1, vec![Argument::new("post", 5, "ID!")], vec![])];

    let (document, _) =
        DocumentFormatter::new(true, false)
            .format_operation(OperationKind::Mutation, Some("Like"), &selections);
    assert_eq!(document, "mutation Like($post: ID!){like(post:$post)}");

    let (document, _) =
        DocumentFormatter::new(false, false)
            .format_operation(OperationKind::Subscription, Some("OnLike"), &selections);
    assert_eq!(document, "subscription OnLike{like(post:5)}");
}

#[test]
fn formatting_is_repeatable() {
    let selections = vec![
        field("a", 1, vec![Argument::new("x", 1, "Int")], vec![]),
        field("a", 2, vec![Argument::new("x", 2, "Int")], vec![]),
    ];

    assert_eq!(
        format_query(true, false, &selections),
        format_query(true, false, &selections),
    );
}
