use super::audit::AuditStamp;
use super::ids::BranchId;
use super::tax_id::TaxId;
use super::sort_key;
use crate::hierarchy::services::pagination::Pageable;
use crate::shared::{HiveError, Result};
use std::cmp::Ordering;
use std::str::FromStr;
use uuid::Uuid;

/// Branch entity: the top of the ownership tree.
///
/// Name, neighborhood and tax id are non-blank for every instance, and the
/// tax id always matches `DD.DDD.DDD/DDDD-DD`. The only mutation path is
/// [`Branch::update_data`], which validates before touching any field.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    id: BranchId,
    name: String,
    neighborhood: String,
    tax_id: TaxId,
    audit: AuditStamp,
}

impl Branch {
    pub fn new(
        name: impl Into<String>,
        neighborhood: impl Into<String>,
        tax_id: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let neighborhood = neighborhood.into();
        let tax_id = Self::validate(&name, &neighborhood, tax_id.into())?;

        Ok(Self {
            id: BranchId::new(),
            name,
            neighborhood,
            tax_id,
            audit: AuditStamp::now(),
        })
    }

    /// Rebuilds a stored branch, re-running the same validation.
    pub fn restore(
        id: BranchId,
        name: String,
        neighborhood: String,
        tax_id: String,
        audit: AuditStamp,
    ) -> Result<Self> {
        let tax_id = Self::validate(&name, &neighborhood, tax_id)?;
        Ok(Self {
            id,
            name,
            neighborhood,
            tax_id,
            audit,
        })
    }

    /// Replaces all three fields, or none of them if any is invalid.
    pub fn update_data(
        &mut self,
        name: impl Into<String>,
        neighborhood: impl Into<String>,
        tax_id: impl Into<String>,
    ) -> Result<()> {
        let name = name.into();
        let neighborhood = neighborhood.into();
        let tax_id = Self::validate(&name, &neighborhood, tax_id.into())?;

        self.name = name;
        self.neighborhood = neighborhood;
        self.tax_id = tax_id;
        self.audit.touch();
        Ok(())
    }

    fn validate(name: &str, neighborhood: &str, tax_id: String) -> Result<TaxId> {
        if name.trim().is_empty() {
            return Err(HiveError::invalid("name", "branch name must not be blank"));
        }
        if neighborhood.trim().is_empty() {
            return Err(HiveError::invalid(
                "neighborhood",
                "branch neighborhood must not be blank",
            ));
        }
        TaxId::new(tax_id)
    }

    pub fn id(&self) -> BranchId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn neighborhood(&self) -> &str {
        &self.neighborhood
    }

    pub fn tax_id(&self) -> &str {
        self.tax_id.as_str()
    }

    pub fn audit(&self) -> &AuditStamp {
        &self.audit
    }
}

/// Sort fields accepted by branch listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BranchSortField {
    #[default]
    Name,
    Neighborhood,
    TaxId,
}

impl FromStr for BranchSortField {
    type Err = HiveError;

    fn from_str(s: &str) -> Result<Self> {
        match sort_key(s).as_str() {
            "name" => Ok(BranchSortField::Name),
            "neighborhood" => Ok(BranchSortField::Neighborhood),
            "taxid" => Ok(BranchSortField::TaxId),
            _ => Err(HiveError::invalid(
                "sort_by",
                format!("'{}' is not one of name, neighborhood, taxId", s),
            )),
        }
    }
}

impl Pageable for Branch {
    type SortField = BranchSortField;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.neighborhood.as_str(),
            self.tax_id.as_str(),
        ]
    }

    fn compare_by(&self, other: &Self, field: BranchSortField) -> Ordering {
        match field {
            BranchSortField::Name => self.name.cmp(&other.name),
            BranchSortField::Neighborhood => self.neighborhood.cmp(&other.neighborhood),
            BranchSortField::TaxId => self.tax_id.as_str().cmp(other.tax_id.as_str()),
        }
    }

    fn tie_breaker(&self) -> Uuid {
        self.id.as_uuid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAX_ID: &str = "12.345.678/0001-99";

    fn field_of(err: HiveError) -> &'static str {
        match err {
            HiveError::InvalidArgument { field, .. } => field,
            other => panic!("expected InvalidArgument, got {other}"),
        }
    }

    #[test]
    fn test_new_branch_keeps_inputs() {
        let branch = Branch::new("Branch A", "Downtown", TAX_ID).unwrap();
        assert_eq!(branch.name(), "Branch A");
        assert_eq!(branch.neighborhood(), "Downtown");
        assert_eq!(branch.tax_id(), TAX_ID);
    }

    #[test]
    fn test_new_branch_assigns_distinct_ids() {
        let a = Branch::new("A", "Downtown", TAX_ID).unwrap();
        let b = Branch::new("A", "Downtown", TAX_ID).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_new_branch_blank_fields_name_the_first_offender() {
        assert_eq!(field_of(Branch::new("", "Downtown", TAX_ID).unwrap_err()), "name");
        assert_eq!(field_of(Branch::new("A", "  \t", TAX_ID).unwrap_err()), "neighborhood");
        assert_eq!(field_of(Branch::new("A", "Downtown", " ").unwrap_err()), "tax_id");
        assert_eq!(field_of(Branch::new(" ", " ", " ").unwrap_err()), "name");
    }

    #[test]
    fn test_new_branch_rejects_malformed_tax_id() {
        let err = Branch::new("A", "Downtown", "12345678000199").unwrap_err();
        assert_eq!(field_of(err), "tax_id");
    }

    #[test]
    fn test_update_data_applies_all_fields() {
        let mut branch = Branch::new("A", "Downtown", TAX_ID).unwrap();
        let id = branch.id();
        branch
            .update_data("B", "Uptown", "98.765.432/0001-10")
            .unwrap();
        assert_eq!(branch.id(), id);
        assert_eq!(branch.name(), "B");
        assert_eq!(branch.neighborhood(), "Uptown");
        assert_eq!(branch.tax_id(), "98.765.432/0001-10");
    }

    #[test]
    fn test_update_data_failure_applies_nothing() {
        let mut branch = Branch::new("A", "Downtown", TAX_ID).unwrap();
        let before = branch.clone();
        assert!(branch.update_data("B", "Uptown", "bad").is_err());
        assert_eq!(branch, before);
    }

    #[test]
    fn test_search_fields_cover_name_neighborhood_tax_id() {
        let branch = Branch::new("Branch A", "Downtown", TAX_ID).unwrap();
        assert!(branch.matches("anch"));
        assert!(branch.matches("town"));
        assert!(branch.matches("/0001"));
        assert!(!branch.matches("downtown"));
    }

    #[test]
    fn test_sort_field_from_str() {
        assert_eq!("name".parse::<BranchSortField>().unwrap(), BranchSortField::Name);
        assert_eq!("taxId".parse::<BranchSortField>().unwrap(), BranchSortField::TaxId);
        assert_eq!("tax_id".parse::<BranchSortField>().unwrap(), BranchSortField::TaxId);
        assert!("capacity".parse::<BranchSortField>().is_err());
    }
}
