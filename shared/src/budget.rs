use crate::catalog::{Plan, DIAMOND_PLANS, GOLD_PLANS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BudgetTab {
    #[default]
    Gold,
    Diamond,
    Addons,
}

impl BudgetTab {
    pub const ALL: [BudgetTab; 3] = [BudgetTab::Gold, BudgetTab::Diamond, BudgetTab::Addons];

    pub fn label(&self) -> &'static str {
        match self {
            BudgetTab::Gold => "Planos Gold",
            BudgetTab::Diamond => "Planos Diamond",
            BudgetTab::Addons => "Adicionais",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            BudgetTab::Gold => "Nosso plano de entrada, mas que já conta com um mix super completo de cocktails para você surpreender seus convidados.",
            BudgetTab::Diamond => "Nosso plano mais completo, fique a vontade para escolher 6 drinks do plano que preferir.",
            BudgetTab::Addons => "Inove e surpreenda seus convidados com nossas experiências exclusivas.",
        }
    }

    /// Plan tiers listed under this tab. Add-ons are not plans.
    pub fn plans(&self) -> &'static [Plan] {
        match self {
            BudgetTab::Gold => &GOLD_PLANS,
            BudgetTab::Diamond => &DIAMOND_PLANS,
            BudgetTab::Addons => &[],
        }
    }
}

/// Tab selection and the details toggle of the budget panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BudgetView {
    pub active_tab: BudgetTab,
    pub details_expanded: bool,
}

impl BudgetView {
    pub fn select_tab(&mut self, tab: BudgetTab) {
        self.active_tab = tab;
    }

    pub fn toggle_details(&mut self) {
        self.details_expanded = !self.details_expanded;
    }

    /// Discount, hours and payment terms only apply to the plan tabs.
    pub fn shows_plan_terms(&self) -> bool {
        matches!(self.active_tab, BudgetTab::Gold | BudgetTab::Diamond)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let view = BudgetView::default();
        assert_eq!(view.active_tab, BudgetTab::Gold);
        assert!(!view.details_expanded);
    }

    #[test]
    fn test_same_tab_twice_is_idempotent() {
        let mut view = BudgetView::default();
        view.select_tab(BudgetTab::Diamond);
        let once = view;
        view.select_tab(BudgetTab::Diamond);
        assert_eq!(view, once);
    }

    #[test]
    fn test_tab_switch_leaves_details_untouched() {
        for expanded in [false, true] {
            for from in BudgetTab::ALL {
                for to in BudgetTab::ALL {
                    let mut view = BudgetView {
                        active_tab: from,
                        details_expanded: expanded,
                    };
                    view.select_tab(to);
                    assert_eq!(view.active_tab, to);
                    assert_eq!(view.details_expanded, expanded);
                }
            }
        }
    }

    #[test]
    fn test_toggle_details() {
        let mut view = BudgetView::default();
        view.toggle_details();
        assert!(view.details_expanded);
        view.toggle_details();
        assert!(!view.details_expanded);
        assert_eq!(view.active_tab, BudgetTab::Gold);
    }

    #[test]
    fn test_tabs_replace_catalog() {
        assert_eq!(BudgetTab::Gold.plans()[0].name, "Gold Standart");
        assert_eq!(BudgetTab::Diamond.plans()[0].name, "Diamond Standart");
        assert!(BudgetTab::Addons.plans().is_empty());

        let mut view = BudgetView::default();
        assert!(view.shows_plan_terms());
        view.select_tab(BudgetTab::Addons);
        assert!(!view.shows_plan_terms());
    }
}
