//! Demo run against a node.
//!
//! Walks the node and each of its chains and mirrors, printing what the client
//! retrieves. Every step catches its own failure and prints it, so one broken
//! call never stops the rest of the run.

mod demo;

pub use demo::*;

use std::io::{self, Write};
use tracing::{debug, info};

use crate::{
	models::{OpaqueRecordModel, PageRequest},
	services::rest::{OpaqueQuery, RestChain, RestNode},
};

/// Prints the demo run to a writer
pub struct ExerciseService<W: Write> {
	out: W,
}

impl<W: Write> ExerciseService<W> {
	pub fn new(out: W) -> Self {
		Self { out }
	}

	pub fn into_inner(self) -> W {
		self.out
	}

	/// Runs the whole demo against `node`
	///
	/// # Errors
	/// Only failures to write the output are returned; node failures are printed
	pub async fn run(&mut self, node: &RestNode) -> io::Result<()> {
		info!(node = %node.base_url(), "Starting demo run");
		writeln!(
			self.out,
			"Client connected to {} using certificate {}",
			node.base_url(),
			node.certificate_name()
		)?;
		writeln!(self.out)?;

		let result = self.node_details(node).await;
		self.report(result)?;
		let result = self.valid_apps(node).await;
		self.report(result)?;
		writeln!(self.out)?;
		let result = self.known_peers(node).await;
		self.report(result)?;
		writeln!(self.out)?;

		writeln!(self.out, "-- Chains:")?;
		match node.chains().await {
			Ok(chains) => {
				for chain in &chains {
					self.exercise_chain(node, chain, true).await?;
				}
			}
			Err(e) => self.report(Err(e.into()))?,
		}
		writeln!(self.out)?;

		writeln!(self.out, "-- Mirrors:")?;
		match node.mirrors().await {
			Ok(mirrors) => {
				for chain in &mirrors {
					self.exercise_chain(node, chain, false).await?;
				}
			}
			Err(e) => self.report(Err(e.into()))?,
		}
		writeln!(self.out)?;

		writeln!(self.out, "-- Create Mirror:")?;
		let result = self.create_mirror(node).await;
		self.report(result)?;
		writeln!(self.out)?;

		writeln!(self.out, "-- Create Chain:")?;
		let result = self.create_chain(node).await;
		self.report(result)?;
		writeln!(self.out)?;

		info!("Demo run finished");
		Ok(())
	}

	/// Prints a step's failure; write failures are passed up instead
	fn report(&mut self, result: anyhow::Result<()>) -> io::Result<()> {
		match result {
			Ok(()) => Ok(()),
			Err(e) => match e.downcast::<io::Error>() {
				Ok(io_error) => Err(io_error),
				Err(e) => {
					debug!(error = %e, "Demo step failed");
					writeln!(self.out, "{:#}", e)
				}
			},
		}
	}

	fn dump(&mut self, document: &str) -> io::Result<()> {
		writeln!(self.out, "----\n{}\n----", document)
	}

	async fn node_details(&mut self, node: &RestNode) -> anyhow::Result<()> {
		let details = node.details().await?;
		writeln!(self.out, "{}", details)?;
		Ok(())
	}

	async fn valid_apps(&mut self, node: &RestNode) -> anyhow::Result<()> {
		let apps = node.apps().await?;
		writeln!(self.out, "-- Valid apps for network {}:", apps.network)?;
		for app in apps.sorted_apps() {
			writeln!(self.out, "{}", app)?;
		}
		Ok(())
	}

	async fn known_peers(&mut self, node: &RestNode) -> anyhow::Result<()> {
		let mut peers = node.peers().await?;
		peers.sort_by(|a, b| a.name.cmp(&b.name));
		writeln!(self.out, "-- Known peers:")?;
		for peer in &peers {
			writeln!(self.out, "{}", peer)?;
		}
		Ok(())
	}

	async fn create_mirror(&mut self, node: &RestNode) -> anyhow::Result<()> {
		for chain in node.add_mirrors_of(&[DEMO_TARGET_CHAIN]).await? {
			writeln!(self.out, "{}", chain)?;
		}
		Ok(())
	}

	async fn create_chain(&mut self, node: &RestNode) -> anyhow::Result<()> {
		let created = node.create_chain(&chain_creation()).await?;
		writeln!(self.out, "{}", created)?;
		Ok(())
	}

	async fn exercise_chain(
		&mut self,
		node: &RestNode,
		chain: &RestChain,
		transact: bool,
	) -> io::Result<()> {
		debug!(chain = %chain.id(), name = %chain.name(), transact, "Exercising chain");
		writeln!(self.out, "{}", chain)?;

		let result = self.summary(chain).await;
		self.report(result)?;
		writeln!(self.out)?;
		let result = self.active_apps(chain).await;
		self.report(result)?;
		writeln!(self.out)?;
		let result = self.keys(chain).await;
		self.report(result)?;
		writeln!(self.out)?;
		let result = self.documents(chain).await;
		self.report(result)?;
		writeln!(self.out)?;
		let result = self.interlocks_stored_here(chain).await;
		self.report(result)?;
		writeln!(self.out)?;
		let result = self.interlocks_of(node, chain).await;
		self.report(result)?;
		writeln!(self.out)?;
		let result = self.records(chain).await;
		self.report(result)?;

		if transact {
			writeln!(self.out)?;
			writeln!(self.out, "  Trying to force an interlock:")?;
			let result = self.force_interlock(chain).await;
			self.report(result)?;
			writeln!(self.out)?;
			writeln!(self.out, "  Trying to permit some keys:")?;
			let result = self.permit_key(chain).await;
			self.report(result)?;
		}
		writeln!(self.out)?;

		writeln!(self.out, "  JsonDocuments:")?;
		let result = self.json_documents(chain).await;
		self.report(result)?;
		if transact {
			let result = self.add_json_document(chain).await;
			self.report(result)?;
		}
		writeln!(self.out)?;

		writeln!(self.out, "  OpaqueRecords:")?;
		let result = self.opaque_records(chain, transact).await;
		self.report(result)?;
		writeln!(self.out)
	}

	async fn summary(&mut self, chain: &RestChain) -> anyhow::Result<()> {
		let summary = chain.summary().await?;
		writeln!(self.out, "  Summary.ActiveApps: {}", join(&summary.active_apps))?;
		writeln!(
			self.out,
			"  Summary.Description: {}",
			summary.description.as_deref().unwrap_or_default()
		)?;
		writeln!(
			self.out,
			"  Summary.IsClosedForNewTransactions: {}",
			summary.is_closed_for_new_transactions
		)?;
		writeln!(self.out, "  Summary.LastRecord: {}", summary.last_record)?;
		Ok(())
	}

	async fn active_apps(&mut self, chain: &RestChain) -> anyhow::Result<()> {
		let apps = chain.active_apps().await?;
		writeln!(self.out, "  Active apps: {}", join(&apps))?;
		Ok(())
	}

	async fn keys(&mut self, chain: &RestChain) -> anyhow::Result<()> {
		writeln!(self.out, "  Keys:")?;
		for key in chain.permitted_keys().await? {
			writeln!(self.out, "    {}", key)?;
		}
		Ok(())
	}

	/// Lists documents, dumping the first plain-text one both ways
	async fn documents(&mut self, chain: &RestChain) -> anyhow::Result<()> {
		writeln!(self.out, "  Documents:")?;
		let mut dumped = false;
		for document in chain.documents().await? {
			writeln!(self.out, "    {}", document)?;
			if !dumped && document.is_plain_text {
				let plain = chain.document_as_plain(&document.file_id).await?;
				self.dump(&plain)?;
				let raw = chain.document_as_raw(&document.file_id).await?;
				self.dump(&raw.to_string())?;
				dumped = true;
			}
		}
		Ok(())
	}

	async fn interlocks_stored_here(&mut self, chain: &RestChain) -> anyhow::Result<()> {
		writeln!(self.out, "  Interlocks stored here:")?;
		for interlock in chain.interlocks().await? {
			writeln!(self.out, "    {}", interlock)?;
		}
		Ok(())
	}

	async fn interlocks_of(&mut self, node: &RestNode, chain: &RestChain) -> anyhow::Result<()> {
		writeln!(self.out, "  Interlocks of this chain:")?;
		for interlock in node.interlocks_of(chain.id()).await? {
			writeln!(self.out, "    {}", interlock)?;
		}
		Ok(())
	}

	async fn records(&mut self, chain: &RestChain) -> anyhow::Result<()> {
		writeln!(self.out, "  Records:")?;
		for record in chain.records_from_to(0, 1).await? {
			writeln!(self.out, "    {}", record)?;
		}
		Ok(())
	}

	async fn force_interlock(&mut self, chain: &RestChain) -> anyhow::Result<()> {
		let interlock = chain.force_interlock(&forced_interlock()).await?;
		writeln!(self.out, "    {}", interlock)?;
		Ok(())
	}

	async fn permit_key(&mut self, chain: &RestChain) -> anyhow::Result<()> {
		for key in chain.permit_keys(&[documenter_key()]).await? {
			writeln!(self.out, "    {}", key)?;
		}
		Ok(())
	}

	async fn json_documents(&mut self, chain: &RestChain) -> anyhow::Result<()> {
		let store = chain.json_store();
		let records = chain.records_from(0).await?;
		let serials: Vec<u64> = records
			.iter()
			.filter(|record| record.metadata.payload_tag_id == JSON_DOCUMENT_TAG)
			.map(|record| record.metadata.serial)
			.take(MAX_JSON_DOCUMENTS)
			.collect();
		if serials.is_empty() {
			writeln!(self.out, "    No jsonDocuments records found")?;
		}
		for serial in serials {
			let document = store.retrieve(serial).await?;
			writeln!(self.out, "    {}", document)?;
		}

		let readers = store
			.retrieve_allowed_readers(Some(chain.id()), PageRequest::default())
			.await?;
		if readers.total_number_of_pages > 0 {
			writeln!(
				self.out,
				"    RetrieveAllowedReaders retrieved first page of {} pages with {} items",
				readers.total_number_of_pages,
				readers.items.len()
			)?;
			if let Some(first) = readers.first() {
				writeln!(self.out, "{}", first.as_json()?)?;
			}
		} else {
			writeln!(self.out, "    RetrieveAllowedReaders retrieved no data")?;
		}
		Ok(())
	}

	async fn add_json_document(&mut self, chain: &RestChain) -> anyhow::Result<()> {
		let stored = chain.json_store().add(&json_document()).await?;
		writeln!(
			self.out,
			"    Stored JSON document at {}",
			stored.metadata.reference
		)?;
		Ok(())
	}

	async fn opaque_records(&mut self, chain: &RestChain, transact: bool) -> anyhow::Result<()> {
		let store = chain.opaque_store();
		let query = store
			.query_records_from(&OpaqueQuery::for_app(OPAQUE_APP_ID))
			.await?;
		writeln!(
			self.out,
			"    LastChangedRecordSerial {} for {}",
			optional(query.last_changed_record_serial),
			chain.id()
		)?;

		let serial = if transact {
			writeln!(
				self.out,
				"    Trying to add an opaque payload #{},{}",
				OPAQUE_APP_ID, OPAQUE_PAYLOAD_TYPE_ID
			)?;
			let added: OpaqueRecordModel = store
				.add_record(
					OPAQUE_APP_ID,
					OPAQUE_PAYLOAD_TYPE_ID,
					query.last_changed_record_serial,
					OPAQUE_PAYLOAD.to_vec(),
				)
				.await?;
			added.serial
		} else {
			query.first().map(|record| record.serial).unwrap_or(0)
		};

		match store.retrieve_single_payload(serial).await? {
			Some(payload) => {
				writeln!(self.out, "    Retrieved AppId: {}", payload.app_id)?;
				writeln!(self.out, "    Retrieved PayloadTypeId: {}", payload.payload_type_id)?;
				writeln!(
					self.out,
					"    Retrieved CreatedAt: {}",
					optional(payload.created_at.map(|at| at.to_rfc3339()))
				)?;
				writeln!(self.out, "    Retrieved Bytes: {:x}", payload.big_endian_value())?;
			}
			None => writeln!(self.out, "    Could not retrieve opaque payload")?,
		}
		Ok(())
	}
}

fn join(values: &[u64]) -> String {
	values
		.iter()
		.map(u64::to_string)
		.collect::<Vec<_>>()
		.join(", ")
}

fn optional<T: ToString>(value: Option<T>) -> String {
	value.map(|v| v.to_string()).unwrap_or_default()
}
