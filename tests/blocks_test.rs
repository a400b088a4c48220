use serde_json::json;
use vitae::blocks::expand_blocks;

#[test]
fn test_primitive_items() {
    let data = json!({"responsibilities": ["Led team", "Shipped v2"]});
    let html = "<ul>{{#responsibilities}}<li>{{.}}</li>{{/responsibilities}}</ul>";
    assert_eq!(
        expand_blocks(html, &data),
        "<ul><li>Led team</li><li>Shipped v2</li></ul>"
    );
}

#[test]
fn test_n_items_concatenated_without_separator() {
    let data = json!({"n": [1, 2, 3, 4]});
    assert_eq!(expand_blocks("{{#n}}[{{.}}]{{/n}}", &data), "[1][2][3][4]");
}

#[test]
fn test_object_items_do_not_leak_fields() {
    let data = json!({"jobs": [{"a": "1", "b": "2"}, {"a": "3"}]});
    assert_eq!(
        expand_blocks("{{#jobs}}({{a}}|{{b}}){{/jobs}}", &data),
        "(1|2)(3|{{b}})"
    );
}

#[test]
fn test_object_item_fields_are_not_dotted() {
    let data = json!({"jobs": [{"meta": {"year": 2020}, "meta.year": "flat"}]});
    assert_eq!(expand_blocks("{{#jobs}}{{meta.year}}{{/jobs}}", &data), "flat");
}

#[test]
fn test_current_item_on_object_is_whole_item() {
    let data = json!({"jobs": [{"a": 1}]});
    assert_eq!(expand_blocks("{{#jobs}}{{.}}{{/jobs}}", &data), "[object Object]");
}

#[test]
fn test_null_item_is_primitive() {
    let data = json!({"list": [null, "x"]});
    assert_eq!(expand_blocks("{{#list}}<{{.}}>{{/list}}", &data), "<null><x>");
}

#[test]
fn test_absent_and_non_array_keys_collapse() {
    let data = json!({"title": "Engineer", "empty": []});
    assert_eq!(expand_blocks("a{{#missing}}x{{/missing}}b", &data), "ab");
    assert_eq!(expand_blocks("a{{#title}}x{{/title}}b", &data), "ab");
    assert_eq!(expand_blocks("a{{#empty}}x{{/empty}}b", &data), "ab");
}

#[test]
fn test_dotted_block_key() {
    let data = json!({"skills": {"tools": ["git", "make"]}});
    assert_eq!(
        expand_blocks("{{#skills.tools}}{{.}};{{/skills.tools}}", &data),
        "git;make;"
    );
}

#[test]
fn test_mismatched_markers_pass_through() {
    let data = json!({"a": ["x"], "b": ["y"]});
    let html = "{{#a}}<li>{{.}}</li>{{/b}}";
    assert_eq!(expand_blocks(html, &data), html);
}

#[test]
fn test_unbalanced_open_before_valid_block() {
    let data = json!({"b": [1, 2]});
    assert_eq!(
        expand_blocks("{{#a}} {{#b}}{{.}}{{/b}}", &data),
        "{{#a}} 12"
    );
}

#[test]
fn test_nested_blocks_are_not_expanded() {
    let data = json!({"outer": [{"inner": ["x"]}]});
    let html = "{{#outer}}<{{#inner}}{{.}}{{/inner}}>{{/outer}}";
    assert_eq!(
        expand_blocks(html, &data),
        "<{{#inner}}[object Object]{{/inner}}>"
    );
}

#[test]
fn test_body_ends_at_first_close() {
    let data = json!({"a": ["1"]});
    assert_eq!(
        expand_blocks("{{#a}}{{.}}{{/a}}|{{/a}}", &data),
        "1|{{/a}}"
    );
}

#[test]
fn test_multiple_blocks_and_surrounding_text() {
    let data = json!({"a": ["1", "2"], "b": ["3"]});
    assert_eq!(
        expand_blocks("<p>{{#a}}{{.}}{{/a}}-{{#b}}{{.}}{{/b}}</p>", &data),
        "<p>12-3</p>"
    );
}
