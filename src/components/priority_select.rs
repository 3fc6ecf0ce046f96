//! Priority Select Component

use leptos::prelude::*;

use crate::models::{Priority, PRIORITY_OPTIONS};

/// Whether the option for `level` should be selected while the bound value
/// is `current`. Levels outside the options fall back to Low.
fn is_selected_option(level: i32, current: i32) -> bool {
    Priority::from_level(level) == Priority::from_level(current)
}

/// `<select>` over the three priority levels
///
/// Selection is driven per `<option>`: setting `select.value` runs before the
/// options are mounted and would be lost.
#[component]
pub fn PrioritySelect(
    #[prop(into)] id: String,
    value: ReadSignal<i32>,
    set_value: WriteSignal<i32>,
) -> impl IntoView {
    view! {
        <select
            id=id
            on:change=move |ev| {
                if let Ok(level) = event_target_value(&ev).parse::<i32>() {
                    set_value.set(level);
                }
            }
        >
            {PRIORITY_OPTIONS.iter().map(|&(level, label)| {
                view! {
                    <option
                        value=level.to_string()
                        prop:selected=move || is_selected_option(level, value.get())
                    >
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected_levels(current: i32) -> Vec<i32> {
        PRIORITY_OPTIONS
            .iter()
            .map(|&(level, _)| level)
            .filter(|&level| is_selected_option(level, current))
            .collect()
    }

    #[test]
    fn test_exactly_the_bound_level_is_selected() {
        assert_eq!(selected_levels(1), vec![1]);
        assert_eq!(selected_levels(2), vec![2]);
        assert_eq!(selected_levels(3), vec![3]);
    }

    #[test]
    fn test_out_of_range_level_selects_low() {
        assert_eq!(selected_levels(0), vec![3]);
        assert_eq!(selected_levels(9), vec![3]);
    }
}
