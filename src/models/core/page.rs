use serde::{Deserialize, Serialize};

/// One page of a paginated node response
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageOf<T> {
	#[serde(default = "Vec::new")]
	pub items: Vec<T>,
	#[serde(default)]
	pub page: u32,
	#[serde(default)]
	pub page_size: u32,
	#[serde(default)]
	pub total_number_of_pages: u32,
	#[serde(default)]
	pub last_to_first: bool,
}

impl<T> PageOf<T> {
	pub fn first(&self) -> Option<&T> {
		self.items.first()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.items.iter()
	}
}

impl<T> IntoIterator for PageOf<T> {
	type Item = T;
	type IntoIter = std::vec::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

/// Query parameters selecting a page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
	pub page: u32,
	/// Zero lets the node pick its default page size
	pub page_size: u32,
}

impl PageRequest {
	pub fn new(page: u32, page_size: u32) -> Self {
		Self { page, page_size }
	}

	pub(crate) fn append_to(&self, query: &mut Vec<(&'static str, String)>) {
		query.push(("page", self.page.to_string()));
		if self.page_size > 0 {
			query.push(("pageSize", self.page_size.to_string()));
		}
	}
}
