use serde::Serialize;
use tracing::{debug, debug_span};

use crate::table::{
	ConstantCheck, ConstantValue, Decoder, Descriptor, GenOptions, Kind, Layout, RawConstant, Result, check_signedness, normalize, retain_for_kind,
	select_strategy, split_into_runs,
};

/// Per-type state threaded through every pipeline stage.
#[derive(Debug, Clone, Copy)]
pub struct TypeContext<'a> {
	/// Declared type name.
	pub type_name: &'a str,
	/// Classification kind.
	pub kind: Kind,
	/// Naming options.
	pub options: &'a GenOptions,
}

/// One declared type and its unresolved constants, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRequest {
	/// Declared type name.
	pub type_name: String,
	/// Classification kind.
	pub kind: Kind,
	/// Constants as declared.
	pub constants: Vec<RawConstant>,
}

/// Layout and decode semantics produced for one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeOutput {
	/// Compact name tables.
	pub layout: Layout,
	/// Decode routine over `layout`.
	pub descriptor: Descriptor,
}

impl TypeOutput {
	/// Evaluator for this output's decode semantics.
	pub fn decoder(&self) -> Decoder<'_> {
		Decoder::new(&self.layout, &self.descriptor)
	}
}

/// Resolve display names for a request and run the pipeline.
pub fn generate_type(request: &TypeRequest, options: &GenOptions) -> Result<TypeOutput> {
	let cx = TypeContext {
		type_name: &request.type_name,
		kind: request.kind,
		options,
	};

	let mut values = Vec::with_capacity(request.constants.len());
	for constant in &request.constants {
		if let Some(value) = constant.resolve(cx.type_name, options)? {
			values.push(value);
		}
	}

	generate_values(&cx, values)
}

/// Run normalization, run splitting, strategy selection, and layout building for resolved values.
pub fn generate_values(cx: &TypeContext<'_>, values: Vec<ConstantValue>) -> Result<TypeOutput> {
	let _span = debug_span!("generate", type_name = cx.type_name, kind = cx.kind.as_str()).entered();

	check_signedness(cx, &values)?;
	let retained = retain_for_kind(cx.kind, values);
	let checks: Vec<ConstantCheck> = retained.iter().map(ConstantCheck::from).collect();

	let normalized = normalize(cx, retained)?;
	debug!(values = normalized.len(), "normalized constants");

	let runs = split_into_runs(cx.kind, normalized);
	let strategy = select_strategy(cx.kind, runs.len());
	debug!(runs = runs.len(), strategy = strategy.as_str(), "selected strategy");

	let layout = Layout::build(cx, strategy, runs);
	debug!(index_bits = layout.index_width.bits(), "built layout");

	let descriptor = Descriptor::build(&layout, checks);
	Ok(TypeOutput { layout, descriptor })
}

/// Process every request independently. Results follow request order.
pub fn generate_all(requests: &[TypeRequest], options: &GenOptions) -> Vec<Result<TypeOutput>> {
	requests.iter().map(|request| generate_type(request, options)).collect()
}

/// Process every request on its own scoped thread. Results follow request order.
pub fn generate_all_parallel(requests: &[TypeRequest], options: &GenOptions) -> Vec<Result<TypeOutput>> {
	std::thread::scope(|scope| {
		let handles: Vec<_> = requests
			.iter()
			.map(|request| scope.spawn(move || generate_type(request, options)))
			.collect();

		handles
			.into_iter()
			.map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
			.collect()
	})
}
