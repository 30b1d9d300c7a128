//! Month Calendar Component
//!
//! Day-grid month view without events.

use chrono::{Local, NaiveDate};
use leptos::prelude::*;

use crate::calendar::{MonthCursor, WEEKDAY_LABELS};

#[component]
pub fn CalendarView() -> impl IntoView {
    view! {
        <section class="view calendar-view">
            <MonthCalendar today=Local::now().date_naive() />
        </section>
    }
}

#[component]
pub fn MonthCalendar(today: NaiveDate) -> impl IntoView {
    let (cursor, set_cursor) = signal(MonthCursor::containing(today));

    view! {
        <div class="month-calendar">
            <div class="calendar-toolbar">
                <h2 class="calendar-title">{move || cursor.get().title()}</h2>
                <div class="calendar-nav">
                    <button
                        class="calendar-btn"
                        disabled=move || cursor.get() == MonthCursor::containing(today)
                        on:click=move |_| set_cursor.set(MonthCursor::containing(today))
                    >
                        "today"
                    </button>
                    <button class="calendar-btn" on:click=move |_| set_cursor.update(|c| *c = c.prev())>"‹"</button>
                    <button class="calendar-btn" on:click=move |_| set_cursor.update(|c| *c = c.next())>"›"</button>
                </div>
            </div>

            <table class="calendar-grid">
                <thead>
                    <tr>
                        {WEEKDAY_LABELS.iter().map(|label| view! { <th>{*label}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || cursor.get().weeks(today).into_iter().map(|week| view! {
                        <tr>
                            {week.into_iter().map(|cell| view! {
                                <td class=cell.class_name()>
                                    <span class="day-number">{cell.date.format("%-d").to_string()}</span>
                                </td>
                            }).collect_view()}
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
