use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::meal_plan::entities::{MealPlanDay, MealPlanItem};

/// Groups items by date, oldest first, ordering each day by meal slot.
pub fn group_by_date(items: Vec<MealPlanItem>) -> Vec<MealPlanDay> {
    let mut days: BTreeMap<NaiveDate, Vec<MealPlanItem>> = BTreeMap::new();
    for item in items {
        days.entry(item.scheduled_for).or_default().push(item);
    }

    days.into_iter()
        .map(|(date, mut meals)| {
            meals.sort_by_key(|m| (m.meal, m.created_at));
            MealPlanDay { date, meals }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::meal_plan::entities::MealSlot;

    #[test]
    fn items_are_grouped_per_day_in_slot_order() {
        let plan_id = Uuid::new_v4();
        let day = |d| NaiveDate::from_ymd_opt(2026, 5, d).unwrap();
        let items = vec![
            MealPlanItem::new(plan_id, Uuid::new_v4(), day(4), MealSlot::Dinner),
            MealPlanItem::new(plan_id, Uuid::new_v4(), day(3), MealSlot::Snack),
            MealPlanItem::new(plan_id, Uuid::new_v4(), day(4), MealSlot::Breakfast),
        ];

        let days = group_by_date(items);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, day(3));
        assert_eq!(days[1].date, day(4));
        let slots: Vec<MealSlot> = days[1].meals.iter().map(|m| m.meal).collect();
        assert_eq!(slots, vec![MealSlot::Breakfast, MealSlot::Dinner]);
    }

    #[test]
    fn no_items_means_no_days() {
        assert!(group_by_date(Vec::new()).is_empty());
    }
}
