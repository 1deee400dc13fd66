use duty_rotation::{MemberSchedule, MonthlyRosterReport};

pub fn show_monthly_report_debug_data(report: &MonthlyRosterReport) {
    println!("\n=======================================================");
    println!("🗓️ [DEBUG] 当番表 {} (計 {} 週間)", report.title, report.week_labels.len());
    println!("=======================================================");

    for (week_idx, label) in report.week_labels.iter().enumerate() {
        println!("📅 [Week {}] {}", week_idx + 1, label);
        for row in &report.rows {
            let duty = row.get(week_idx + 1).map(String::as_str).unwrap_or("???");
            println!("   {:<15} : {}", row[0], duty);
        }
    }
    println!("=======================================================\n");
}

pub fn show_member_schedule_debug_data(schedule: &MemberSchedule) {
    println!("\n=======================================================");
    println!("👤 [DEBUG] {} の予定 (現在: {})", schedule.member, schedule.current_duty);
    println!("=======================================================");
    for row in &schedule.rows {
        println!(
            "   {} Week {} {:<16} {}",
            if row.is_current { "┣▶" } else { "┣ " },
            row.week.sequence_number,
            row.week.label,
            row.duty
        );
    }
    println!("=======================================================\n");
}
