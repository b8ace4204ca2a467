//! Состояние страницы списка товаров.
//!
//! Plain data plus transitions; the component wires these to signals, the
//! router and the network. Keeping it free of reactive types lets the
//! ordering and timing rules be checked with ordinary unit tests.

use contracts::domain::a001_product::{FetchError, PageResult, Product};
use contracts::shared::list_query::{ListQuery, SortDirection, SortField};
use leptos::prelude::*;
use std::time::Duration;

/// Шаг пагинации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    Prev,
    Next,
}

impl PageStep {
    pub fn delta(self) -> i64 {
        match self {
            PageStep::Prev => -1,
            PageStep::Next => 1,
        }
    }
}

/// Квитанция на загрузку страницы.
///
/// Carries the generation it was issued under; results are only applied
/// while that generation is still the latest.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub generation: u64,
    pub query: ListQuery,
    pub started_at_ms: f64,
}

/// Итог применения ответа
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchApplied {
    /// A newer query was issued meanwhile; nothing changed.
    Superseded,
    /// Data swapped in; loading clears after `settle_after`.
    Applied { settle_after: Duration },
}

#[derive(Clone, Debug)]
pub struct ProductListState {
    // Текущий запрос (из адресной строки)
    pub query: ListQuery,

    // Текст в поле поиска, до отправки может отличаться от query.search
    pub input_text: String,

    // Флаг загрузки (скелетоны вместо карточек)
    pub is_loading: bool,

    pub sort_menu_open: bool,

    // Последняя применённая страница
    pub page: PageResult,
    pub last_error: Option<FetchError>,

    generation: u64,
}

impl ProductListState {
    pub fn new(query: ListQuery) -> Self {
        Self {
            input_text: query.search.clone(),
            query,
            is_loading: true,
            sort_menu_open: false,
            page: PageResult {
                items: Vec::new(),
                total_count: 0,
                page_count: 1,
            },
            last_error: None,
            generation: 0,
        }
    }

    // ------------------------------------------------------------------
    // Fetch cycle
    // ------------------------------------------------------------------

    /// Начало загрузки для нового запроса
    pub fn begin_fetch(&mut self, query: ListQuery, now_ms: f64) -> FetchTicket {
        self.generation += 1;
        // Back/forward changes the search without the input; keep them in step
        if query.search != self.query.search {
            self.input_text = query.search.clone();
        }
        self.query = query.clone();
        self.is_loading = true;
        FetchTicket {
            generation: self.generation,
            query,
            started_at_ms: now_ms,
        }
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Применить ответ, если запрос ещё актуален.
    ///
    /// Errors leave an empty list behind. The returned delay is what remains
    /// of `min_loading` since the fetch started.
    pub fn apply_fetch(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<PageResult, FetchError>,
        now_ms: f64,
        min_loading: Duration,
    ) -> FetchApplied {
        if !self.is_current(ticket) {
            return FetchApplied::Superseded;
        }

        match outcome {
            Ok(page) => {
                self.page = page;
                self.last_error = None;
            }
            Err(e) => {
                self.page = PageResult::default();
                self.last_error = Some(e);
            }
        }

        let elapsed = Duration::from_millis((now_ms - ticket.started_at_ms).max(0.0) as u64);
        FetchApplied::Applied {
            settle_after: min_loading.saturating_sub(elapsed),
        }
    }

    /// Снять флаг загрузки; `false` если запрос уже устарел
    pub fn settle(&mut self, ticket: &FetchTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.is_loading = false;
        true
    }

    // ------------------------------------------------------------------
    // User actions. Each returns the address to navigate to, or `None`
    // when the address would not change.
    // ------------------------------------------------------------------

    pub fn submit_search(&mut self, text: &str) -> Option<ListQuery> {
        self.input_text = text.to_string();
        let target = self.query.with_search(text);
        self.request(target)
    }

    pub fn change_sort(&mut self, field: SortField, direction: SortDirection) -> Option<ListQuery> {
        self.sort_menu_open = false;
        let target = self.query.with_sort(field, direction);
        self.request(target)
    }

    /// Соседняя страница в пределах [1, page_count]; на границе ничего не делает
    pub fn go_to_page(&mut self, step: PageStep) -> Option<ListQuery> {
        let last = i64::from(self.page.page_count.max(1));
        let target = (i64::from(self.query.page) + step.delta()).clamp(1, last) as u32;
        if target == self.query.page {
            return None;
        }
        let target = self.query.with_page(target);
        self.request(target)
    }

    fn request(&mut self, target: ListQuery) -> Option<ListQuery> {
        if target == self.query {
            return None;
        }
        self.is_loading = true;
        Some(target)
    }

    pub fn set_input_text(&mut self, text: String) {
        self.input_text = text;
    }

    pub fn clear_input(&mut self) {
        self.input_text.clear();
    }

    pub fn toggle_sort_menu(&mut self) {
        self.sort_menu_open = !self.sort_menu_open;
    }

    pub fn close_sort_menu(&mut self) {
        self.sort_menu_open = false;
    }

    // ------------------------------------------------------------------
    // View helpers
    // ------------------------------------------------------------------

    pub fn products(&self) -> Vec<Product> {
        self.page.displayable()
    }

    pub fn sort_label(&self) -> &'static str {
        self.query.sort_option().label()
    }

    /// Сколько скелетонов показать: на последней странице только остаток
    pub fn skeleton_count(&self, page_size: u32) -> usize {
        let page_size = u64::from(page_size.max(1));
        let count = if self.query.page == self.page.page_count {
            match self.page.total_count % page_size {
                0 => page_size,
                rest => rest,
            }
        } else {
            page_size
        };
        count as usize
    }

    pub fn pagination_label(&self) -> String {
        format!("Page {} of {}", self.query.page, self.page.page_count)
    }

    pub fn show_pagination(&self) -> bool {
        !self.is_loading && self.page.page_count > 0
    }

    pub fn can_go_prev(&self) -> bool {
        self.query.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.query.page < self.page.page_count
    }

    pub fn search_summary(&self) -> Option<String> {
        if self.is_loading || self.query.search.is_empty() {
            return None;
        }
        Some(format!(
            "{} products of {}",
            self.products().len(),
            self.query.search
        ))
    }

    pub fn show_empty_state(&self) -> bool {
        !self.is_loading && self.products().is_empty()
    }
}

/// Адрес страницы списка для запроса
pub fn address_url(query: &ListQuery) -> String {
    let qs = serde_qs::to_string(&query.to_address_params()).unwrap_or_default();
    format!("/?{}", qs)
}

pub fn create_state(query: ListQuery) -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::new(query))
}
