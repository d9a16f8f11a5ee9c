use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::{ApiError, CatalogClient, ProductQuery};
use crate::catalog::Product;
use crate::mvi::Reducer;
use crate::view::{DetailLinks, GridView};

use super::intent::PageIntent;
use super::model::PageModel;
use super::reducer::ViewReducer;
use super::state::ViewState;

/// How a dispatched intent ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The intent changed state without fetching.
    NoFetch,
    /// The products were rendered.
    Rendered,
    /// The request failed and the error message was rendered.
    Failed,
    /// A newer dispatch started before this one settled; its result was dropped.
    Superseded,
}

struct FetchTicket {
    generation: u64,
    query: ProductQuery,
}

/// Page controller.
///
/// Owns the page model and runs fetch-and-render cycles against the product
/// API. Clones share the same model, so a UI can keep one handle for drawing
/// while dispatches run as independent tasks. Overlapping dispatches are
/// allowed; each one takes a new generation and only the newest one renders.
#[derive(Clone)]
pub struct Storefront {
    client: CatalogClient,
    links: DetailLinks,
    model: Arc<Mutex<PageModel>>,
}

impl Storefront {
    pub fn new(client: CatalogClient, links: DetailLinks, cart_count: usize) -> Self {
        Self::with_view(client, links, cart_count, ViewState::default())
    }

    /// Starts from `view` instead of the default selections.
    pub fn with_view(
        client: CatalogClient,
        links: DetailLinks,
        cart_count: usize,
        view: ViewState,
    ) -> Self {
        let model = PageModel {
            view,
            cart_count,
            ..PageModel::default()
        };
        Self {
            client,
            links,
            model: Arc::new(Mutex::new(model)),
        }
    }

    /// Copy of the current page model.
    pub fn snapshot(&self) -> PageModel {
        self.model.lock().clone()
    }

    /// Loads categories, then the first product page.
    pub async fn init(&self) -> DispatchOutcome {
        self.load_categories().await;
        self.dispatch(PageIntent::Reload).await
    }

    /// Populates the category list. Failures are logged and leave it empty.
    pub async fn load_categories(&self) {
        match self.client.categories().await {
            Ok(categories) => {
                tracing::info!(count = categories.len(), "Loaded categories");
                self.model.lock().categories = categories;
            }
            Err(err) => {
                tracing::error!(error = %err, kind = err.kind(), "Failed to fetch categories");
            }
        }
    }

    /// Applies `intent` and, when it asks for one, runs a fetch-and-render cycle.
    pub async fn dispatch(&self, intent: PageIntent) -> DispatchOutcome {
        let Some(ticket) = self.begin(intent) else {
            return DispatchOutcome::NoFetch;
        };

        let model = Arc::clone(&self.model);
        let _loader = scopeguard::guard(ticket.generation, move |generation| {
            let mut model = model.lock();
            if model.generation == generation {
                model.loading = false;
            }
        });

        tracing::debug!(
            generation = ticket.generation,
            mode = ?ticket.query.mode(),
            "Fetching products"
        );
        let result = self.client.products(&ticket.query).await;
        self.settle(ticket.generation, result)
    }

    /// Reduces the intent and, for fetching intents, shows the loading
    /// indicator and clears the grid under a new generation.
    fn begin(&self, intent: PageIntent) -> Option<FetchTicket> {
        let fetch = intent.triggers_fetch();
        let mut guard = self.model.lock();
        let model = &mut *guard;
        model.view = ViewReducer::reduce(std::mem::take(&mut model.view), intent);
        if !fetch {
            return None;
        }

        model.generation += 1;
        model.loading = true;
        model.grid = GridView::Blank;
        Some(FetchTicket {
            generation: model.generation,
            query: model.view.product_query(),
        })
    }

    fn settle(&self, generation: u64, result: Result<Vec<Product>, ApiError>) -> DispatchOutcome {
        let mut guard = self.model.lock();
        let model = &mut *guard;
        if model.generation != generation {
            tracing::debug!(
                generation,
                current = model.generation,
                "Discarding superseded product response"
            );
            return DispatchOutcome::Superseded;
        }

        match result {
            Ok(products) => {
                tracing::debug!(generation, count = products.len(), "Rendering products");
                model.view = ViewReducer::reduce(
                    std::mem::take(&mut model.view),
                    PageIntent::ResultsLoaded { products },
                );
                model.grid = GridView::from_products(model.view.last_results(), &self.links);
                DispatchOutcome::Rendered
            }
            Err(err) => {
                tracing::error!(error = %err, kind = err.kind(), "Fetch products failed");
                model.grid = GridView::Failed;
                DispatchOutcome::Failed
            }
        }
    }
}
