//! End-to-end tests: ABI JSON in, TypeScript binding text out.
//!
//! These tests go through the public pipeline only: `Description` parsing,
//! the format registry, and `generate`.

use abi_define::Description;
use abi_gen::codegen::typescript::type_table;
use abi_gen::naming::{event_name, method_name};
use abi_gen::output::generate;
use abi_gen::registry::FormatRegistry;
use abi_gen::type_map::integer_widths;
use serde_json::{Value, json};

const TOKEN_ABI: &str = include_str!("fixtures/token.json");

fn generate_ts(name: &str, address: &str, abi: &Value) -> String {
    let registry = FormatRegistry::new();
    let description = Description::parse(name, address, abi).expect("valid ABI");
    generate(&description, &registry, "ts")
        .expect("ts format is registered")
        .text
}

/// Returns the JSON embedded in the `IBArray = ...;` field.
fn embedded_abi(code: &str) -> Value {
    let line = code
        .split("\r\n")
        .map(str::trim_start)
        .find(|line| line.starts_with("IBArray = "))
        .expect("IBArray field present");
    let json = line
        .trim_start_matches("IBArray = ")
        .trim_end_matches(';');
    serde_json::from_str(json).expect("IBArray holds valid JSON")
}

/// Asserts braces balance and never close below zero, ignoring the
/// embedded ABI line.
fn assert_balanced(code: &str) {
    let mut depth: i64 = 0;
    for line in code
        .split("\r\n")
        .filter(|line| !line.trim_start().starts_with("IBArray = "))
    {
        for c in line.chars() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    assert!(depth >= 0, "brace closed below zero in line: {line:?}");
                }
                _ => {}
            }
        }
    }
    assert_eq!(depth, 0, "unbalanced braces in:\n{code}");
}

#[test]
fn raw_description_round_trips() {
    let abi: Value = serde_json::from_str(TOKEN_ABI).unwrap();
    let code = generate_ts("Token", "0xdead", &abi);

    assert_eq!(embedded_abi(&code), abi);
}

#[test]
fn round_trip_keeps_original_names() {
    let abi = json!([
        {"type": "function", "name": "Balance", "inputs": []},
        {"type": "event", "name": "transfer", "inputs": []}
    ]);
    let code = generate_ts("C", "0x0", &abi);

    let embedded = embedded_abi(&code);
    assert_eq!(embedded[0]["name"], "Balance");
    assert_eq!(embedded[1]["name"], "transfer");
}

#[test]
fn type_mapping_is_total_over_primitives() {
    let types = type_table();

    let mut primitives = vec![
        "bool".to_string(),
        "address".to_string(),
        "string".to_string(),
        "int".to_string(),
        "uint".to_string(),
    ];
    for width in integer_widths() {
        primitives.push(format!("int{width}"));
        primitives.push(format!("uint{width}"));
    }

    for primitive in &primitives {
        let mapped = types.resolve_type(primitive);
        assert!(!mapped.is_empty());
        assert_ne!(&mapped, primitive, "{primitive} should be mapped");

        let array = types.resolve_type(&format!("{primitive}[]"));
        assert_eq!(array, format!("{mapped}[]"));
    }

    assert_eq!(types.resolve_type("bytes32"), "bytes32");
    assert_eq!(types.resolve_type("tuple[]"), "tuple[]");
}

#[test]
fn naming_transforms_in_generated_code() {
    let names = ["Balance", "totalSupply", "X", "ABC"];
    let entries: Vec<Value> = names
        .iter()
        .flat_map(|n| {
            [
                json!({"type": "function", "name": n, "inputs": []}),
                json!({"type": "event", "name": n, "inputs": []}),
            ]
        })
        .collect();

    let code = generate_ts("C", "0x0", &Value::Array(entries));

    for name in names {
        let method = method_name(name);
        let event = event_name(name);
        assert_eq!(method[1..], name[1..]);
        assert_eq!(event, format!("on{}{}", name[..1].to_uppercase(), &name[1..]));

        assert!(code.contains(&format!("\t{method} () {{\r\n")));
        assert!(code.contains(&format!("\t{event} () {{\r\n")));
        assert!(code.contains(&format!("executeMethod(this, '{name}');")));
        assert!(code.contains(&format!("watch(this, '{name}');")));
    }
}

#[test]
fn generation_is_idempotent_per_generator() {
    let registry = FormatRegistry::new();
    let description = Description::from_json_str("Token", "0x1", TOKEN_ABI).unwrap();
    let spec = registry.lookup("ts").unwrap();
    let generator = spec.bind(&description);

    let first = generator.run();
    let second = generator.run();

    assert_eq!(first, second);
    assert!(std::ptr::eq(first, second), "second run should return the cached text");
}

#[test]
fn braces_balance_for_every_shape() {
    let abis = [
        json!([]),
        serde_json::from_str::<Value>(TOKEN_ABI).unwrap(),
        json!([
            {"type": "function", "name": "Many", "inputs": [
                {"name": "a", "type": "uint8"}, {"name": "b", "type": "bool"}, {"name": "c", "type": "string"}
            ], "outputs": [{"name": "x", "type": "int"}, {"type": "address[]"}]},
            {"type": "event", "name": "Weird", "inputs": [], "outputs": [{"type": "bool"}]}
        ]),
    ];

    for abi in &abis {
        assert_balanced(&generate_ts("C", "0x0", abi));
    }
}

#[test]
fn output_uses_tabs_and_crlf_only() {
    let code = generate_ts("Token", "0x1", &serde_json::from_str(TOKEN_ABI).unwrap());

    assert!(!code.replace("\r\n", "").contains('\n'));
    assert!(!code.contains("    "), "indentation should use tabs");
    assert!(code.ends_with("}\r\n"));
}

#[test]
fn empty_description_scenario() {
    let code = generate_ts("Empty", "0x0", &json!([]));

    assert!(code.contains("export class Empty implements IContract {"));
    assert!(code.contains("\tconstructor (private blockchainService: BlockchainService) {\r\n\t}\r\n"));
    assert!(!code.contains("executeMethod"));
    assert!(!code.contains("watch("));
}

#[test]
fn single_output_method_scenario() {
    let abi = json!([{
        "type": "function",
        "name": "Balance",
        "inputs": [{"name": "who", "type": "address"}],
        "outputs": [{"type": "uint256"}]
    }]);
    let code = generate_ts("Token", "0x1", &abi);

    assert!(code.contains("\tbalance (who: string) : Observable< number > {\r\n"));
    assert!(code.contains("\t\treturn this.blockchainService.executeMethod(this, 'Balance', who);\r\n"));
}

#[test]
fn multi_output_method_scenario() {
    let abi = json!([{
        "type": "function",
        "name": "Pair",
        "inputs": [],
        "outputs": [{"name": "a", "type": "uint8"}, {"name": "b", "type": "bool"}]
    }]);
    let code = generate_ts("C", "0x1", &abi);

    assert!(code.contains(": Observable<{ a : number, b : boolean }>"));
}

#[test]
fn event_scenario() {
    let abi = json!([{
        "type": "event",
        "name": "Transfer",
        "inputs": [{"name": "to", "type": "address"}]
    }]);
    let code = generate_ts("C", "0x1", &abi);

    assert!(code.contains("\tonTransfer (to: string) {\r\n"));
    assert!(code.contains("\t\treturn this.blockchainService.watch(this, 'Transfer');\r\n"));
}

#[test]
fn unrecognized_entry_scenario() {
    let abi = json!([
        {"type": "fallback", "payable": true},
        {"type": "function", "name": "Ping", "inputs": []}
    ]);

    let description = Description::parse("C", "0x1", &abi).unwrap();
    assert_eq!(description.dropped.len(), 1);
    assert_eq!(description.dropped[0].kind.as_deref(), Some("fallback"));
    assert_eq!(description.methods.len(), 1);
    assert!(description.events.is_empty());
    assert!(description.constructor.is_none());

    let registry = FormatRegistry::new();
    let file = generate(&description, &registry, "ts").unwrap();
    assert!(file.text.contains("\tping () {\r\n"));
    assert!(!file.text.contains("fallback ("));
}

#[test]
fn token_fixture_full_shape() {
    let code = generate_ts("Token", "0xdead", &serde_json::from_str(TOKEN_ABI).unwrap());

    assert!(code.contains("\tAddress = 0xdead;\r\n"));
    assert!(code.contains(
        "constructor (private blockchainService: BlockchainService, private initialSupply: number) {"
    ));
    assert!(code.contains(
        "transfer (to: string, value: number) : Observable< success : boolean > {"
    ));
    assert!(code.contains("executeMethod(this, 'Transfer', { to, value });"));
    assert!(code.contains(
        "holders () : Observable<{ accounts : string[], count : number }> {"
    ));
    assert!(code.contains("onTransfer (from: string, to: string, value: number) {"));
}
