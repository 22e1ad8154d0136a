//! Terminal rendering of suggestion cards

use crate::traits::ResultView;
use shared::NameResult;

/// Real view printing result cards to the terminal as they arrive
#[derive(Debug, Default, Clone)]
pub struct RealResultView;

impl RealResultView {
    pub fn new() -> Self {
        Self
    }
}

impl ResultView for RealResultView {
    fn name_received(&self, result: &NameResult) {
        println!();
        println!("✨ {}", result.name);
        println!("   性别：{}", result.gender.label());
        println!("   寓意：{}", result.meaning.join("、"));
        println!("   出处：{}", result.source);
        println!("   释义：{}", result.explanation);
    }

    fn generation_succeeded(&self, total: usize) {
        println!();
        println!("✅ 名字生成成功！（共 {total} 个）");
    }

    fn generation_failed(&self, message: &str) {
        eprintln!();
        eprintln!("❌ 生成名字时出现错误，请重试！（{message}）");
    }

    fn name_disliked(&self, name: &str) {
        println!("👎 已将「{name}」标记为不喜欢");
    }
}
