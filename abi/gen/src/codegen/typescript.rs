//! TypeScript binding generation.
//!
//! Generates an injectable TypeScript class implementing `IContract`. Every
//! ABI function becomes a method returning an `Observable`, and every event
//! becomes an `on<Name>` subscription. Calls are delegated to the injected
//! `BlockchainService`.
//!
//! ## Examples
//!
//! For a contract `Token` with a `Balance(address who) returns (uint256)`
//! function, the generated class contains:
//!
//! ```text
//! /**
//!  * Balance function
//!  * @param {string} who
//!  * @returns {Observable< number >}
//!  */
//! balance (who: string) : Observable< number > {
//!     return this.blockchainService.executeMethod(this, 'Balance', who);
//! }
//! ```

use std::borrow::Cow;
use std::cell::OnceCell;

use abi_define::{Description, Entry, EntryKind, Parameter};
use tracing::{debug, trace};

use crate::codegen::Generator;
use crate::emitter::CodeEmitter;
use crate::naming::{event_name, method_name};
use crate::type_map::{TypeMapper, integer_widths};

/// Format identifier.
pub const FORMAT_ID: &str = "ts";

/// Content type of the generated file.
pub const CONTENT_TYPE: &str = "text/typescript";

/// File extension of the generated file.
pub const EXTENSION: &str = "ts";

/// Interface implemented by every generated class.
pub const CONTRACT_INTERFACE: &str = "IContract";

/// Name of the implicit execution-service constructor parameter.
pub const SERVICE_PARAM: &str = "blockchainService";

/// Type of the implicit execution-service constructor parameter.
pub const SERVICE_TYPE: &str = "BlockchainService";

/// Reactive wrapper used for return types.
pub const STREAM_TYPE: &str = "Observable";

const IMPORTS: [&str; 3] = [
    "import { IContract } from './abstract/icontract';",
    "import { BlockchainService } from '../services/blockchain';",
    "import { Observable } from 'rxjs/Observable';",
];

/// The ABI to TypeScript type table.
///
/// ## Examples
///
/// ```
/// use abi_gen::codegen::typescript::type_table;
///
/// let types = type_table();
/// assert_eq!(types.resolve_type("bool"), "boolean");
/// assert_eq!(types.resolve_type("address[]"), "string[]");
/// assert_eq!(types.resolve_type("uint128"), "number");
/// ```
pub fn type_table() -> TypeMapper {
    let mut types = TypeMapper::new()
        .with("bool", "boolean")
        .with("address", "string")
        .with("string", "string")
        .with("int", "number")
        .with("uint", "number");

    for width in integer_widths() {
        types.insert(format!("int{width}"), "number");
        types.insert(format!("uint{width}"), "number");
    }

    types
}

/// Registry factory for [`TypeScriptGenerator`].
pub fn factory<'a>(description: &'a Description, types: &'a TypeMapper) -> Box<dyn Generator + 'a> {
    Box::new(TypeScriptGenerator::new(description, types))
}

/// Generates a TypeScript contract class from a [`Description`].
///
/// ## Examples
///
/// ```
/// use abi_define::Description;
/// use abi_gen::codegen::Generator;
/// use abi_gen::codegen::typescript::{TypeScriptGenerator, type_table};
///
/// let description = Description::from_json_str("Empty", "0x0", "[]").unwrap();
/// let types = type_table();
/// let generator = TypeScriptGenerator::new(&description, &types);
///
/// let text = generator.run();
/// assert!(text.contains("export class Empty implements IContract"));
/// assert!(text.ends_with("}\r\n"));
/// ```
#[derive(Debug)]
pub struct TypeScriptGenerator<'a> {
    description: &'a Description,
    types: &'a TypeMapper,
    output: OnceCell<String>,
}

impl<'a> TypeScriptGenerator<'a> {
    /// Binds a generator to a description and a type table.
    pub fn new(description: &'a Description, types: &'a TypeMapper) -> Self {
        Self {
            description,
            types,
            output: OnceCell::new(),
        }
    }

    fn emit(&self) -> String {
        debug!(
            contract = %self.description.name,
            methods = self.description.methods.len(),
            events = self.description.events.len(),
            "emitting TypeScript binding"
        );

        let mut w = CodeEmitter::new();

        self.append_header(&mut w);
        self.append_class_open(&mut w);
        self.append_fields(&mut w);

        let constructor = self.description.constructor_or_default();
        self.append_constructor(&mut w, &constructor);

        for method in &self.description.methods {
            self.append_method(&mut w, method);
        }

        for event in &self.description.events {
            self.append_event(&mut w, event);
        }

        w.close_block();
        debug_assert_eq!(w.depth(), 0);

        w.into_string()
    }

    fn append_header(&self, w: &mut CodeEmitter) {
        for import in IMPORTS {
            w.push_str(import);
            w.append_newline();
        }
        w.append_newline();
    }

    fn append_class_open(&self, w: &mut CodeEmitter) {
        w.push_str("@Injectable()");
        w.append_newline();
        w.push_str(&format!(
            "export class {} implements {CONTRACT_INTERFACE}",
            self.description.name
        ));
        w.open_block();
        w.append_newline();
    }

    fn append_fields(&self, w: &mut CodeEmitter) {
        w.push_str(&format!("IBArray = {};", self.description.raw_json()));
        w.append_newline();
        w.push_str(&format!("Address = {};", self.description.address));
        w.append_newline();
        w.append_newline();
    }

    fn append_constructor(&self, w: &mut CodeEmitter, entry: &Entry) {
        let mut inputs = Vec::with_capacity(entry.inputs.len() + 1);
        inputs.push(Parameter::new(SERVICE_PARAM, SERVICE_TYPE));
        inputs.extend(entry.inputs.iter().cloned());

        self.append_docs(
            w,
            &self.description.name,
            EntryKind::Constructor,
            &inputs,
            &entry.outputs,
        );
        w.push_str("constructor (");
        self.append_params(w, &inputs, Some("private "));
        w.push_str(")");
        w.open_block();
        w.close_block();
        w.append_newline();
    }

    fn append_method(&self, w: &mut CodeEmitter, entry: &Entry) {
        let original = entry.name();
        let binding = method_name(original);
        trace!(original, binding = %binding, "method");

        self.append_signature(w, entry, &binding, EntryKind::Function);
        w.open_block();
        w.push_str(&format!(
            "return this.{SERVICE_PARAM}.executeMethod(this, '{original}'"
        ));
        match entry.inputs.as_slice() {
            [] => {}
            [single] => {
                w.push_str(", ");
                w.push_str(&parameter_name(single, 0));
            }
            inputs => {
                let names: Vec<_> = inputs
                    .iter()
                    .enumerate()
                    .map(|(i, p)| parameter_name(p, i))
                    .collect();
                w.push_str(&format!(", {{ {} }}", names.join(", ")));
            }
        }
        w.push_str(");");
        w.append_newline();
        w.close_block();
        w.append_newline();
    }

    fn append_event(&self, w: &mut CodeEmitter, entry: &Entry) {
        let original = entry.name();
        let binding = event_name(original);
        trace!(original, binding = %binding, "event");

        self.append_signature(w, entry, &binding, EntryKind::Event);
        w.open_block();
        w.push_str(&format!("return this.{SERVICE_PARAM}.watch(this, '{original}');"));
        w.append_newline();
        w.close_block();
        w.append_newline();
    }

    /// Docs, name, parameter list, and the optional return annotation.
    fn append_signature(&self, w: &mut CodeEmitter, entry: &Entry, binding: &str, role: EntryKind) {
        self.append_docs(w, entry.name(), role, &entry.inputs, &entry.outputs);
        w.push_str(binding);
        w.push_str(" (");
        self.append_params(w, &entry.inputs, None);
        w.push_str(")");
        if entry.has_outputs() {
            w.push_str(" : ");
            w.push_str(&self.output_annotation(&entry.outputs));
        }
    }

    fn append_params(&self, w: &mut CodeEmitter, params: &[Parameter], qualifier: Option<&str>) {
        let rendered: Vec<_> = params
            .iter()
            .enumerate()
            .map(|(i, p)| {
                format!(
                    "{}{}: {}",
                    qualifier.unwrap_or_default(),
                    parameter_name(p, i),
                    self.types.resolve(p)
                )
            })
            .collect();
        w.push_str(&rendered.join(", "));
    }

    fn append_docs(
        &self,
        w: &mut CodeEmitter,
        name: &str,
        role: EntryKind,
        inputs: &[Parameter],
        outputs: &[Parameter],
    ) {
        w.push_str("/**");
        w.append_newline();
        w.push_str(&format!(" * {name} {role}"));
        w.append_newline();
        for (i, input) in inputs.iter().enumerate() {
            w.push_str(&format!(
                " * @param {{{}}} {}",
                self.types.resolve(input),
                parameter_name(input, i)
            ));
            w.append_newline();
        }
        if !outputs.is_empty() {
            w.push_str(&format!(" * @returns {{{}}}", self.output_annotation(outputs)));
            w.append_newline();
        }
        w.push_str(" */");
        w.append_newline();
    }

    /// `Observable< T >` for one output, `Observable<{ a : T, b : U }>` for more.
    fn output_annotation(&self, outputs: &[Parameter]) -> String {
        let field = |p: &Parameter| {
            if p.has_name() {
                format!("{} : {}", p.name, self.types.resolve(p))
            } else {
                self.types.resolve(p)
            }
        };

        match outputs {
            [single] => format!("{STREAM_TYPE}< {} >", field(single)),
            many => {
                let fields: Vec<_> = many.iter().map(field).collect();
                format!("{STREAM_TYPE}<{{ {} }}>", fields.join(", "))
            }
        }
    }
}

impl Generator for TypeScriptGenerator<'_> {
    fn format_id(&self) -> &'static str {
        FORMAT_ID
    }

    fn run(&self) -> &str {
        self.output.get_or_init(|| self.emit())
    }

    fn is_done(&self) -> bool {
        self.output.get().is_some()
    }
}

/// The parameter's name, or `<type>_<index>` when it has none.
///
/// Every bracket segment (`[]`, `[3]`) is cut from the type so the fallback
/// stays an identifier.
fn parameter_name(param: &Parameter, index: usize) -> Cow<'_, str> {
    if param.has_name() {
        Cow::Borrowed(param.name.as_str())
    } else {
        let bare = param
            .ty
            .split_once('[')
            .map_or(param.ty.as_str(), |(bare, _)| bare);
        Cow::Owned(format!("{bare}_{index}"))
    }
}
