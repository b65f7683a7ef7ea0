//! Node-level operations of the REST API.

use std::sync::Arc;
use url::Url;

use crate::{
	models::{
		AppsModel, ChainCreatedModel, ChainCreationModel, ChainIdModel, ClientConfig,
		InterlockingRecordModel, NodeDetailsModel, PageOf, PeerModel,
	},
	services::rest::{
		transport::{segment, HttpTransport},
		RestChain, RestClientError,
	},
};

/// Client for one node, authenticated with a client certificate
///
/// Cloning is cheap: clones share the same underlying HTTP client.
#[derive(Clone, Debug)]
pub struct RestNode {
	transport: Arc<HttpTransport>,
	certificate_name: String,
}

impl RestNode {
	/// Connects to the node described by `config`
	///
	/// Loads the client certificate; no request is made until an operation is called.
	///
	/// # Errors
	/// Returns an error if the certificate cannot be loaded or the address is invalid
	pub fn new(config: &ClientConfig) -> Result<Self, RestClientError> {
		let transport = HttpTransport::from_config(config)?;
		Ok(Self::with_transport(transport, config.certificate_name()))
	}

	pub fn with_transport(transport: HttpTransport, certificate_name: impl Into<String>) -> Self {
		Self {
			transport: Arc::new(transport),
			certificate_name: certificate_name.into(),
		}
	}

	pub fn base_url(&self) -> &Url {
		self.transport.base_url()
	}

	pub fn certificate_name(&self) -> &str {
		&self.certificate_name
	}

	pub async fn details(&self) -> Result<NodeDetailsModel, RestClientError> {
		self.transport.get_json("", &[]).await
	}

	/// Apps valid in the node's network
	pub async fn apps(&self) -> Result<AppsModel, RestClientError> {
		self.transport.get_json("apps", &[]).await
	}

	pub async fn peers(&self) -> Result<Vec<PeerModel>, RestClientError> {
		self.transport.get_json("peers", &[]).await
	}

	/// Chains owned by the node
	pub async fn chains(&self) -> Result<Vec<RestChain>, RestClientError> {
		let chains: Vec<ChainIdModel> = self.transport.get_json("chain", &[]).await?;
		Ok(self.wrap(chains))
	}

	/// Chains of other nodes mirrored by this node
	pub async fn mirrors(&self) -> Result<Vec<RestChain>, RestClientError> {
		let chains: Vec<ChainIdModel> = self.transport.get_json("mirrors", &[]).await?;
		Ok(self.wrap(chains))
	}

	/// Starts mirroring the given chains, returning the node's updated mirror list
	pub async fn add_mirrors_of<S: AsRef<str>>(
		&self,
		chain_ids: &[S],
	) -> Result<Vec<ChainIdModel>, RestClientError> {
		if chain_ids.is_empty() {
			return Err(RestClientError::request_error(
				"At least one chain id is required to add mirrors",
			));
		}
		let ids: Vec<&str> = chain_ids.iter().map(AsRef::as_ref).collect();
		self.transport.post_json("mirrors", &[], &ids).await
	}

	pub async fn create_chain(
		&self,
		model: &ChainCreationModel,
	) -> Result<ChainCreatedModel, RestClientError> {
		model.validate().map_err(RestClientError::request_error)?;
		self.transport.post_json("chain", &[], model).await
	}

	/// Interlocks stored anywhere on the node that lock the given chain
	pub async fn interlocks_of(
		&self,
		chain_id: &str,
	) -> Result<PageOf<InterlockingRecordModel>, RestClientError> {
		self.transport
			.get_json(&format!("interlockings/{}", segment(chain_id)), &[])
			.await
	}

	/// Handle for a chain known by id, without querying the node
	pub fn chain(&self, id: impl Into<String>) -> RestChain {
		RestChain::new(
			self.transport.clone(),
			ChainIdModel {
				id: id.into(),
				name: String::new(),
				closed: false,
			},
		)
	}

	fn wrap(&self, chains: Vec<ChainIdModel>) -> Vec<RestChain> {
		chains
			.into_iter()
			.map(|chain| RestChain::new(self.transport.clone(), chain))
			.collect()
	}
}
