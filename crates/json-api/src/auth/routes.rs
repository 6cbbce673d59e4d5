//! Route to scope table.

use promos_app::auth::Scope;

/// Routes served by the promo API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PromoRoute {
    /// `POST /promos`
    Create,

    /// `GET /promos`
    List,

    /// `GET /promos/{filter}`
    Search,

    /// `DELETE /promos/{code}`
    Delete,

    /// `GET /delete`
    DeleteAll,
}

impl PromoRoute {
    /// Scope a caller must hold when authentication is enabled.
    pub(crate) const fn required_scope(self) -> Option<Scope> {
        match self {
            Self::Create => Some(Scope::PromosCreate),
            Self::List | Self::Search => Some(Scope::PromosRead),
            Self::Delete => Some(Scope::PromosDelete),
            Self::DeleteAll => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_routes_share_the_read_scope() {
        assert_eq!(PromoRoute::List.required_scope(), Some(Scope::PromosRead));
        assert_eq!(PromoRoute::Search.required_scope(), Some(Scope::PromosRead));
    }

    #[test]
    fn write_routes_have_dedicated_scopes() {
        assert_eq!(
            PromoRoute::Create.required_scope(),
            Some(Scope::PromosCreate)
        );
        assert_eq!(
            PromoRoute::Delete.required_scope(),
            Some(Scope::PromosDelete)
        );
    }

    #[test]
    fn bulk_delete_is_unguarded() {
        assert_eq!(PromoRoute::DeleteAll.required_scope(), None);
    }
}
