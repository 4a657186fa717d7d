use crate::core::{CartLine, CatalogApi, Notifier, Storage};
use crate::utils::error::{CartError, Result};

/// Fixed storage key holding the JSON-serialized array of cart lines.
pub const CART_KEY: &str = "storefront-cart.json";

pub const MSG_ADD_FAILED: &str = "Error while adding the product";
pub const MSG_REMOVE_FAILED: &str = "Error while removing the product";
pub const MSG_OUT_OF_STOCK: &str = "Requested quantity is out of stock";
pub const MSG_UPDATE_FAILED: &str = "Error while changing product quantity";

/// Shopping-cart state container. Holds an ordered list of cart lines and
/// writes every successful mutation to storage before replacing the
/// in-memory list.
///
/// Mutation operations never return errors: failures are reported through
/// the [`Notifier`] with one of the fixed messages above, and the in-memory
/// cart is left untouched.
pub struct CartStore<S: Storage, A: CatalogApi, N: Notifier> {
    storage: S,
    api: A,
    notifier: N,
    lines: Vec<CartLine>,
}

impl<S: Storage, A: CatalogApi, N: Notifier> CartStore<S, A, N> {
    /// Restores the cart from storage. A missing key yields an empty cart;
    /// a stored value that fails to deserialize is a constructor error.
    pub async fn load(storage: S, api: A, notifier: N) -> Result<Self> {
        let lines = match storage.read(CART_KEY).await? {
            Some(bytes) => serde_json::from_slice(&bytes)?,
            None => Vec::new(),
        };

        tracing::debug!(lines = lines.len(), "cart restored from storage");

        Ok(Self {
            storage,
            api,
            notifier,
            lines,
        })
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Adds one unit of `product_id`. An existing line is bumped through
    /// [`Self::update_amount`] (so the stock check and its notifications
    /// apply); a new product is fetched from the catalog and appended with
    /// amount 1.
    pub async fn add(&mut self, product_id: u64) {
        let existing_amount = self
            .lines
            .iter()
            .find(|l| l.id == product_id)
            .map(|l| l.amount);
        if let Some(amount) = existing_amount {
            self.update_amount(product_id, i64::from(amount) + 1).await;
            return;
        }

        if let Err(e) = self.try_add_new(product_id).await {
            tracing::warn!(product_id, error = %e, "failed to add product");
            self.notifier.error(MSG_ADD_FAILED);
        }
    }

    async fn try_add_new(&mut self, product_id: u64) -> Result<()> {
        let product = self.api.product(product_id).await?;

        let mut next = self.lines.clone();
        next.push(CartLine::new(product, 1));
        self.persist(next).await
    }

    /// Removes the line for `product_id`. A missing line is an error and
    /// is reported to the user.
    pub async fn remove(&mut self, product_id: u64) {
        if let Err(e) = self.try_remove(product_id).await {
            tracing::warn!(product_id, error = %e, "failed to remove product");
            self.notifier.error(MSG_REMOVE_FAILED);
        }
    }

    async fn try_remove(&mut self, product_id: u64) -> Result<()> {
        if !self.lines.iter().any(|l| l.id == product_id) {
            return Err(CartError::LineNotFound { product_id });
        }

        let next: Vec<CartLine> = self
            .lines
            .iter()
            .filter(|l| l.id != product_id)
            .cloned()
            .collect();
        self.persist(next).await
    }

    /// Sets the quantity of `product_id` to `amount`, validated against the
    /// inventory service. An `amount` of zero or below is a silent no-op.
    /// If no line matches, the cart content is unchanged but still written
    /// back, without any notification (historical storefront behavior).
    pub async fn update_amount(&mut self, product_id: u64, amount: i64) {
        if amount <= 0 {
            return;
        }

        match self.try_update_amount(product_id, amount).await {
            Ok(()) => {}
            Err(CartError::OutOfStock {
                requested,
                available,
                ..
            }) => {
                tracing::debug!(product_id, requested, available, "stock check rejected update");
                self.notifier.error(MSG_OUT_OF_STOCK);
            }
            Err(e) => {
                tracing::warn!(product_id, error = %e, "failed to update quantity");
                self.notifier.error(MSG_UPDATE_FAILED);
            }
        }
    }

    async fn try_update_amount(&mut self, product_id: u64, amount: i64) -> Result<()> {
        let stock = self.api.stock(product_id).await?;
        if amount > i64::from(stock.amount) {
            return Err(CartError::OutOfStock {
                product_id,
                requested: amount,
                available: stock.amount,
            });
        }
        // Bounded by the stock check above, so this cannot truncate.
        let amount = amount as u32;

        let mut next = self.lines.clone();
        if let Some(line) = next.iter_mut().find(|l| l.id == product_id) {
            line.amount = amount;
        }
        self.persist(next).await
    }

    /// Storage first, then memory. A failed write leaves the in-memory
    /// cart at the previous state.
    async fn persist(&mut self, next: Vec<CartLine>) -> Result<()> {
        let bytes = serde_json::to_vec(&next)?;
        self.storage.write(CART_KEY, &bytes).await?;
        self.lines = next;
        Ok(())
    }
}
