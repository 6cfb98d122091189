//! Estado de los modales de creación, edición y confirmación de borrado

/// Modal de formulario
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormModal<F> {
    #[default]
    Closed,
    Create(F),
    Edit { id: String, form: F },
}

impl<F: Default> FormModal<F> {
    /// Abrir en modo creación con valores por defecto
    pub fn open_create(&mut self) {
        *self = FormModal::Create(F::default());
    }

    /// Abrir en modo edición con una copia del formulario
    pub fn open_edit(&mut self, id: impl Into<String>, form: F) {
        *self = FormModal::Edit {
            id: id.into(),
            form,
        };
    }

    pub fn close(&mut self) {
        *self = FormModal::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, FormModal::Closed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, FormModal::Edit { .. })
    }

    pub fn form(&self) -> Option<&F> {
        match self {
            FormModal::Closed => None,
            FormModal::Create(form) => Some(form),
            FormModal::Edit { form, .. } => Some(form),
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut F> {
        match self {
            FormModal::Closed => None,
            FormModal::Create(form) => Some(form),
            FormModal::Edit { form, .. } => Some(form),
        }
    }
}

/// Confirmación explícita antes de borrar
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DeleteConfirmation<E> {
    #[default]
    Idle,
    Pending(E),
}

impl<E> DeleteConfirmation<E> {
    pub fn request(&mut self, entity: E) {
        *self = DeleteConfirmation::Pending(entity);
    }

    pub fn cancel(&mut self) {
        *self = DeleteConfirmation::Idle;
    }

    pub fn pending(&self) -> Option<&E> {
        match self {
            DeleteConfirmation::Idle => None,
            DeleteConfirmation::Pending(entity) => Some(entity),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, DeleteConfirmation::Pending(_))
    }
}
