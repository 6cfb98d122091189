//! Estado de listado compartido por los gestores de entidades
//!
//! Carga completa, filtro de búsqueda en memoria y reconciliación directa
//! después de cada mutación. Las recargas llevan un número de generación: si
//! llega la respuesta de una petición vieja después de una nueva, se descarta.

use tracing::debug;

use crate::utils::errors::AdminResult;

/// Entidad que se puede listar y buscar
pub trait ManagedEntity: Clone {
    fn entity_id(&self) -> &str;

    /// Campos sobre los que aplica la búsqueda
    fn search_fields(&self) -> Vec<&str>;
}

/// Comprobante de una carga en curso
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone)]
pub struct ListState<E> {
    items: Vec<E>,
    loading: bool,
    error: Option<String>,
    search: String,
    generation: u64,
}

impl<E: ManagedEntity> Default for ListState<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Coincidencia de búsqueda: subcadena sin distinguir mayúsculas
pub fn matches_search(fields: &[&str], term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    fields.iter().any(|field| field.to_lowercase().contains(&term))
}

impl<E: ManagedEntity> ListState<E> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            search: String::new(),
            generation: 0,
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Listado filtrado por el texto de búsqueda (se recalcula en cada llamada)
    pub fn filtered(&self) -> Vec<&E> {
        if self.search.trim().is_empty() {
            return self.items.iter().collect();
        }
        self.items
            .iter()
            .filter(|item| matches_search(&item.search_fields(), &self.search))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&E> {
        self.items.iter().find(|item| item.entity_id() == id)
    }

    /// Iniciar una carga; invalida cualquier carga anterior todavía en vuelo
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        LoadTicket {
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Aplicar el resultado de una carga
    ///
    /// `Ok(true)` si se aplicó, `Ok(false)` si la respuesta era vieja y se
    /// descartó. Un error deja los elementos anteriores intactos.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: AdminResult<Vec<E>>) -> AdminResult<bool> {
        if !self.is_current(ticket) {
            debug!(
                "⏭️ Respuesta descartada (generación {} < {})",
                ticket.generation, self.generation
            );
            return result.map(|_| false);
        }

        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                Ok(true)
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Reemplazar o agregar una entidad por su id (nunca duplica)
    pub fn upsert(&mut self, entity: E) {
        match self
            .items
            .iter_mut()
            .find(|item| item.entity_id() == entity.entity_id())
        {
            Some(existing) => *existing = entity,
            None => self.items.push(entity),
        }
    }

    /// Quitar una entidad; `true` si existía
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.entity_id() != id);
        self.items.len() != before
    }
}
