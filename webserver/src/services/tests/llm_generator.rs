//! Tests for the LLM-backed name generator

use crate::services::RealNameGenerator;
use shared::{Gender, GenerationRequest, NameLength};

fn request() -> GenerationRequest {
    GenerationRequest {
        gender: Some(Gender::Male),
        meanings: vec!["智慧聪颖".to_string(), "健康平安".to_string()],
        cultural_source: vec!["诗经楚辞".to_string()],
        avoid_characters: vec!["强".to_string()],
        avoid_sounds: vec!["shi".to_string()],
        count: 5,
        name_length: NameLength::Double,
        disliked_names: vec!["伟强".to_string()],
    }
}

mod prompt_tests {
    use super::*;

    #[test]
    fn test_prompt_carries_every_request_field() {
        let prompt = RealNameGenerator::build_prompt(&request());

        assert!(prompt.contains("生成5个中文名字"));
        assert!(prompt.contains("男孩"));
        assert!(prompt.contains("双字名（两个字）"));
        assert!(prompt.contains("智慧聪颖, 健康平安"));
        assert!(prompt.contains("诗经楚辞"));
        assert!(prompt.contains("回避字：强"));
        assert!(prompt.contains("回避读音：shi"));
        assert!(prompt.contains("伟强"));
    }

    #[test]
    fn test_prompt_defaults_for_empty_optional_fields() {
        let mut req = request();
        req.gender = None;
        req.avoid_characters.clear();
        req.avoid_sounds.clear();
        req.disliked_names.clear();
        req.name_length = NameLength::Any;

        let prompt = RealNameGenerator::build_prompt(&req);

        assert!(prompt.contains("性别：不限"));
        assert!(prompt.contains("单字名或双字名均可"));
        assert!(prompt.contains("回避字：无"));
        assert!(prompt.contains("回避读音：无"));
        assert!(prompt.contains("排除名字（此前已被否决，不要重复生成）：无"));
    }

    #[test]
    fn test_prompt_requests_json_shape() {
        let prompt = RealNameGenerator::build_prompt(&request());

        assert!(prompt.contains(r#""names": ["#));
        assert!(prompt.contains(r#""gender": "male/female/neutral""#));
    }
}

mod parse_tests {
    use super::*;

    #[test]
    fn test_parse_names_accepts_provider_payload() {
        let content = r#"{
            "names": [
                {
                    "name": "子衿",
                    "gender": "female",
                    "meaning": ["温文尔雅"],
                    "source": "诗经·郑风",
                    "explanation": "青青子衿，悠悠我心"
                },
                {
                    "name": "明哲",
                    "gender": "male",
                    "meaning": ["智慧聪颖", "品德高尚"],
                    "source": "尚书",
                    "explanation": "知人则哲"
                }
            ]
        }"#;

        let names = RealNameGenerator::parse_names(content).unwrap();

        assert_eq!(names.len(), 2);
        assert_eq!(names[0].name, "子衿");
        assert_eq!(names[0].gender, Gender::Female);
        assert_eq!(names[1].meaning.len(), 2);
    }

    #[test]
    fn test_parse_names_rejects_malformed_payload() {
        assert!(RealNameGenerator::parse_names("not json").is_err());
        assert!(RealNameGenerator::parse_names(r#"{"suggestions": []}"#).is_err());
        assert!(RealNameGenerator::parse_names(r#"{"names": [{"name": "孤"}]}"#).is_err());
    }

    #[test]
    fn test_parse_names_allows_empty_list() {
        let names = RealNameGenerator::parse_names(r#"{"names": []}"#).unwrap();
        assert!(names.is_empty());
    }
}
