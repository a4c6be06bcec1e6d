//! What to do with a `?state=...&rep=...` query.
//!
//! The state part is judged from the query alone; the representative is only
//! kept when a catalog lists it for that state.

use repmap_core::{Catalog, Preselection, StateInfo};

pub const TITLE_SELECT_STATE: &str = "Select a State";
pub const TITLE_INVALID_STATE: &str = "Invalid State";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// No state requested.
    Nothing,
    /// A state was requested but is not one we know.
    Invalid { requested: String },
    Select {
        state: &'static StateInfo,
        /// Only set when the catalog lists the representative for `state`.
        rep: Option<String>,
    },
}

pub fn plan(selection: &Preselection, catalog: Option<&Catalog>) -> Plan {
    let Some(requested) = selection.state.as_deref() else {
        return Plan::Nothing;
    };
    let Some(state) = selection.resolve_state() else {
        return Plan::Invalid {
            requested: requested.to_string(),
        };
    };
    let rep = selection
        .rep
        .as_deref()
        .filter(|rep| catalog.is_some_and(|c| c.options.contains(state.abbr, rep)))
        .map(str::to_string);
    Plan::Select { state, rep }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json(r#"{"CA": ["Rep A", "Rep B"]}"#, "{}").unwrap()
    }

    #[test]
    fn test_plan_nothing() {
        assert_eq!(plan(&Preselection::parse(""), Some(&catalog())), Plan::Nothing);
        assert_eq!(plan(&Preselection::parse("rep=Rep+A"), Some(&catalog())), Plan::Nothing);
    }

    #[test]
    fn test_plan_invalid() {
        assert_eq!(
            plan(&Preselection::parse("state=Atlantis"), Some(&catalog())),
            Plan::Invalid {
                requested: "Atlantis".into()
            }
        );
    }

    #[test]
    fn test_plan_select_with_listed_rep() {
        let Plan::Select { state, rep } =
            plan(&Preselection::parse("state=California&rep=Rep%20B"), Some(&catalog()))
        else {
            panic!("expected a selection");
        };
        assert_eq!(state.abbr, "CA");
        assert_eq!(rep.as_deref(), Some("Rep B"));
    }

    #[test]
    fn test_plan_drops_unlisted_rep() {
        let Plan::Select { rep, .. } =
            plan(&Preselection::parse("state=california&rep=Somebody"), Some(&catalog()))
        else {
            panic!("expected a selection");
        };
        assert_eq!(rep, None);
    }

    #[test]
    fn test_plan_without_catalog() {
        assert_eq!(plan(&Preselection::parse(""), None), Plan::Nothing);
        assert_eq!(
            plan(&Preselection::parse("state=atlantis"), None),
            Plan::Invalid {
                requested: "atlantis".into()
            }
        );
        let Plan::Select { state, rep } =
            plan(&Preselection::parse("state=california&rep=Rep+A"), None)
        else {
            panic!("expected a selection");
        };
        assert_eq!(state.abbr, "CA");
        assert_eq!(rep, None);
    }
}
