//! 答案解析扩充服务 - 业务能力层
//!
//! 为只有 "字母. 选项文本" 的简短答案追加韩语解析，
//! 已有详细解析的答案保持不变。

use regex::Regex;
use std::sync::LazyLock;

static SIMPLE_ANSWER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-E])\.\s*(.+?)(?:\s*\(|$)").expect("答案正则无效"));

/// 视为"已有详细解析"的最小长度（字符数）
const DETAILED_MIN_CHARS: usize = 100;

const DEFAULT_EXPLANATION: &str = "이 답변이 정답인 이유를 설명하는 상세한 해설입니다.";

/// 扩充答案解析
///
/// 返回值与输入相同表示无需修改。结果是确定的，对已扩充的答案再次调用不会改变它。
pub fn expand_explanation(answer_text: &str) -> String {
    if answer_text.is_empty() || is_detailed(answer_text) {
        return answer_text.to_string();
    }

    let Some(caps) = SIMPLE_ANSWER_RE.captures(answer_text) else {
        return answer_text.to_string();
    };
    let (Some(letter), Some(text)) = (caps.get(1), caps.get(2)) else {
        return answer_text.to_string();
    };

    let clean = text.as_str().trim();
    match pick_explanation(clean) {
        Some(explanation) => format!("{}. {} ({})", letter.as_str(), clean, explanation),
        None => answer_text.to_string(),
    }
}

fn is_detailed(answer_text: &str) -> bool {
    answer_text.chars().count() > DETAILED_MIN_CHARS
        && answer_text.contains('(')
        && answer_text.contains(':')
}

/// 按关键词选择解析，规则按顺序匹配第一条
///
/// 命中的规则族内部条件不满足时（如温度没有方向）返回 `None`
fn pick_explanation(answer: &str) -> Option<&'static str> {
    let lower = answer.to_lowercase();
    let en = |needle: &str| lower.contains(needle);
    let ko = |needle: &str| answer.contains(needle);

    // 可解释性
    if en("pdp") || en("partial dependence") {
        return Some("부분 의존성 플롯(PDPs): 특정 특성이 모델 예측에 미치는 영향을 시각화하여 모델의 설명 가능성과 투명성을 높입니다. 이해관계자들에게 모델이 어떻게 작동하는지 설명하는 데 유용합니다.");
    }
    if en("decision tree") || ko("의사결정 나무") {
        return Some("의사결정 나무: 모델의 내부 의사결정 과정을 트리 구조로 시각화할 수 있어 해석 가능성이 높습니다. 각 노드에서의 분기 조건과 결과를 명확히 추적할 수 있어 설명 가능성을 제공합니다.");
    }
    if en("model convergence tables") {
        return Some("모델 수렴 테이블: 모델 학습 과정에서의 수렴 상태를 보여주지만, 모델의 예측 메커니즘 자체를 설명하지는 않습니다. 설명 가능성을 위해서는 PDPs나 의사결정 나무가 더 적합합니다.");
    }

    // LLM 与生成式 AI
    if en("summarization") || ko("요약") {
        return Some("요약 챗봇: 문서에서 핵심 포인트를 추출하고 요약하는 작업에 적합합니다. LLM의 강력한 텍스트 이해 및 생성 능력을 활용하여 법률 문서와 같은 긴 문서의 핵심 내용을 빠르게 파악할 수 있습니다.");
    }
    if en("prompt") || ko("프롬프트") {
        return Some("프롬프트 조정: LLM의 출력 길이와 언어를 제어하는 가장 직접적인 방법입니다. 프롬프트에 명확한 지시를 추가하여 원하는 형식과 언어로 응답을 유도할 수 있습니다.");
    }
    if en("temperature") {
        if en("increase") || en("higher") {
            return Some("온도 증가: LLM의 출력 다양성을 높입니다. 더 높은 온도는 더 창의적이고 무작위적인 응답을 생성하지만, 일관성은 떨어질 수 있습니다.");
        }
        if en("decrease") || en("lower") {
            return Some("온도 감소: LLM의 출력 일관성을 높입니다. 더 낮은 온도는 더 결정론적이고 일관된 응답을 생성하지만, 다양성은 줄어듭니다.");
        }
        return None;
    }
    if en("llm") && en("size") {
        return Some("LLM 크기 선택: 모델 크기에 따라 성능과 리소스 요구사항이 달라집니다. 더 큰 모델은 일반적으로 더 나은 성능을 제공하지만, 더 많은 컴퓨팅 자원과 비용이 필요합니다.");
    }
    if en("slm") && en("edge") {
        return Some("엣지 디바이스에 SLM 배포: 엣지 환경에서는 네트워크 지연 없이 빠른 응답이 필요하며, 리소스 제약이 있습니다. 소형 언어 모델(SLM)은 엣지 디바이스에 최적화되어 실시간 추론을 가능하게 합니다.");
    }

    // 推理类型
    if en("asynchronous inference") || (ko("비동기") && ko("추론")) {
        return Some("비동기 추론: 대용량 데이터와 긴 처리 시간이 필요한 작업에 적합합니다. 1GB의 데이터와 1시간의 처리 시간을 요구하는 경우, 비동기 추론이 실시간에 가까운 지연 시간을 제공하면서도 대량 처리를 가능하게 합니다.");
    }
    if en("real-time inference") || ko("실시간 추론") {
        return Some("실시간 추론: 낮은 지연 시간이 필요한 애플리케이션에 적합합니다. 사용자 요청에 즉시 응답해야 하는 대화형 애플리케이션에서 사용됩니다.");
    }
    if en("serverless inference") || ko("서버리스 추론") {
        return Some("서버리스 추론: 서버 관리 없이 추론을 실행할 수 있습니다. 트래픽이 불규칙한 워크로드에 적합하며, 사용한 만큼만 비용을 지불합니다.");
    }
    if en("batch transform") || ko("배치 변환") {
        return Some("배치 변환: 대량의 데이터를 한 번에 처리하는 데 적합합니다. 실시간 응답이 필요하지 않고 대량 데이터 처리에 효율적입니다.");
    }

    // 模型训练
    if en("re-train") || en("retrain") || (ko("재학습") && ko("모델")) {
        return Some("모델 재학습: 데이터 드리프트가 감지되었을 때, 최신 데이터로 모델을 재학습하는 것이 가장 효과적인 해결책입니다. 새로운 데이터 분포에 맞게 모델을 업데이트하여 성능을 유지하거나 개선할 수 있습니다.");
    }
    if en("transfer learning") || ko("전이 학습") {
        return Some("전이 학습: 사전 학습된 모델을 새로운 관련 작업에 적응시키는 기법입니다. 처음부터 모델을 학습하는 것보다 적은 데이터와 계산 자원으로 높은 성능을 달성할 수 있습니다.");
    }
    if en("unsupervised learning") || ko("비지도 학습") {
        return Some("비지도 학습: 레이블이 없는 데이터에서 패턴을 찾는 학습 방법입니다. 클러스터링, 이상 탐지 등에 사용됩니다.");
    }
    if en("fine-tune") || ko("파인튜닝") {
        return Some("파인튜닝: 사전 학습된 모델을 특정 작업에 맞게 미세 조정하는 과정입니다. 전체 모델을 처음부터 학습하는 것보다 효율적입니다.");
    }
    if en("epoch") {
        if en("increase") {
            return Some("에폭 수 증가: 모델이 데이터를 더 많이 학습하게 하여 성능을 개선할 수 있지만, 과적합(overfitting)의 위험이 있습니다.");
        }
        if en("decrease") {
            return Some("에폭 수 감소: 학습 시간은 줄어들지만 모델 성능이 저하될 수 있습니다. 충분한 학습이 이루어지지 않을 수 있습니다.");
        }
        return None;
    }

    // 评估指标
    if en("accuracy") || ko("정확도") {
        return Some("정확도(Accuracy): 전체 예측 중 올바른 예측의 비율을 나타냅니다. 분류 문제에서 가장 직관적인 평가 지표이지만, 클래스 불균형이 있을 때는 부정확할 수 있습니다.");
    }
    if en("rmse") || en("root mean squared error") {
        return Some("평균 제곱근 오차(RMSE): 회귀 문제에서 예측값과 실제값 사이의 평균 오차를 측정합니다. 값이 낮을수록 모델 성능이 좋습니다.");
    }
    if en("r-squared") || ko("R-제곱") {
        return Some("R-제곱 점수: 모델이 데이터의 분산을 얼마나 잘 설명하는지를 나타냅니다. 0과 1 사이의 값을 가지며, 1에 가까울수록 좋습니다.");
    }
    if en("f1") && en("score") {
        return Some("F1 점수: 정밀도와 재현율의 조화 평균입니다. 클래스 불균형이 있는 경우 정확도보다 더 신뢰할 수 있는 지표입니다.");
    }

    // 监控与数据漂移
    if en("model monitor") || ko("모니터링") {
        if en("sensitivity") || ko("민감도") {
            return Some("모니터링 민감도 조정: 임계값을 변경하는 것은 데이터 드리프트가 발생했다는 사실을 변경하지 않습니다. 드리프트 자체를 해결하지 못하므로 적절한 해결책이 아닙니다.");
        }
        return Some("Amazon SageMaker Model Monitor: 프로덕션 환경에서 모델의 성능과 데이터 품질을 지속적으로 모니터링합니다. 데이터 드리프트, 개념 드리프트, 데이터 품질 문제 등을 감지하고 알림을 제공합니다.");
    }
    if en("data drift") || ko("데이터 드리프트") {
        return Some("데이터 드리프트: 프로덕션 환경의 데이터 분포가 학습 데이터와 달라지는 현상입니다. 모델 성능 저하의 주요 원인 중 하나이며, 정기적인 모니터링과 재학습이 필요합니다.");
    }
    if en("endpoint") && (en("restart") || ko("재시작")) {
        return Some("엔드포인트 재시작: 데이터 드리프트 문제를 해결하지 못합니다. 재시작은 임시적인 조치일 뿐이며, 근본적인 문제인 데이터 분포 변화를 해결하지 않습니다.");
    }

    // AWS 服务
    if en("ground truth") {
        return Some("Amazon SageMaker Ground Truth Plus: 사람이 개입하는 검증(Human-in-the-loop) 방식을 통해 높은 정확도와 잘못된 주석의 위험을 최소화합니다. 복잡한 작업에서 사람의 검증을 통해 품질을 보장합니다.");
    }
    if en("bedrock") && en("knowledge base") {
        return Some("Amazon Bedrock 지식 베이스: 기업의 데이터를 검색 가능한 형태로 저장하고 LLM과 통합하여 정확한 응답을 생성합니다. RAG(Retrieval-Augmented Generation) 패턴을 구현합니다.");
    }
    if en("rekognition") {
        return Some("Amazon Rekognition: 이미지와 비디오에서 객체, 얼굴, 텍스트, 장면을 감지하고 분석하는 서비스입니다. 컴퓨터 비전 작업에 활용됩니다.");
    }
    if en("comprehend") {
        return Some("Amazon Comprehend: 자연어 처리 서비스로 텍스트에서 인사이트, 관계, 감정을 추출합니다. 문서 분석, 감정 분석 등에 사용됩니다.");
    }
    if en("sagemaker clarify") {
        return Some("Amazon SageMaker Clarify: 모델의 편향성과 설명 가능성을 분석하는 서비스입니다. 모델 예측의 공정성을 평가하고 이해관계자에게 투명성을 제공합니다.");
    }
    if en("lex") && en("chatbot") {
        return Some("Amazon Lex: 대화형 챗봇을 구축하는 서비스입니다. 음성 및 텍스트 인터페이스를 제공하며, 자연어 이해(NLU) 기능을 포함합니다.");
    }

    // 应用类型
    if en("recommendation") || ko("추천") {
        return Some("추천 엔진: 사용자의 과거 행동과 선호도를 기반으로 개인화된 추천을 제공합니다. 협업 필터링, 콘텐츠 기반 필터링 등의 기법을 사용합니다.");
    }
    if en("named entity recognition") || ko("개체 인식") {
        return Some("명명된 개체 인식(NER): 텍스트에서 사람, 조직, 위치 등의 명명된 개체를 식별하고 분류하는 작업입니다. 정보 추출의 기본 기술입니다.");
    }
    if en("anomaly detection") || ko("이상 탐지") {
        return Some("이상 탐지: 정상 패턴과 다른 이상한 데이터나 행동을 감지하는 시스템입니다. 사기 탐지, 시스템 모니터링 등에 사용됩니다.");
    }
    if en("fraud") || ko("사기") {
        return Some("사기 예측 시스템: 이상 탐지와 머신러닝을 활용하여 사기 거래를 식별합니다. 실시간 거래 모니터링과 위험 점수 계산을 제공합니다.");
    }

    // 数据管理
    if en("s3") && en("permission") {
        return Some("S3 권한 설정: 보안을 위해 최소 권한 원칙을 따라야 합니다. 공개 액세스는 민감한 데이터에 위험할 수 있습니다.");
    }
    if en("iam") || en("role") {
        return Some("IAM 역할 및 정책: AWS 리소스에 대한 접근을 제어합니다. 최소 권한 원칙에 따라 필요한 권한만 부여해야 합니다.");
    }
    if en("encrypt") || ko("복호화") {
        return Some("데이터 암호화: 민감한 데이터를 보호하기 위해 저장 및 전송 중 암호화가 필요합니다. AWS KMS를 사용하여 암호화 키를 관리할 수 있습니다.");
    }

    // 实验追踪
    if en("experiment") || ko("실험") {
        return Some("실험 추적: 다양한 모델 하이퍼파라미터와 구성을 시도하고 결과를 비교하는 과정입니다. 모델 성능을 최적화하는 데 필수적입니다.");
    }

    Some(DEFAULT_EXPLANATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_answer_gets_explanation() {
        let out = expand_explanation("B. Use transfer learning");
        assert!(out.starts_with("B. Use transfer learning (전이 학습:"));
        assert!(out.ends_with(')'));
    }

    #[test]
    fn test_text_before_parenthesis_is_kept() {
        let out = expand_explanation("A. Partial dependence plots (PDPs)");
        assert!(out.starts_with("A. Partial dependence plots (부분 의존성 플롯(PDPs):"));
    }

    #[test]
    fn test_default_explanation() {
        let out = expand_explanation("C. Something unusual");
        assert_eq!(out, format!("C. Something unusual ({})", DEFAULT_EXPLANATION));
    }

    #[test]
    fn test_temperature_without_direction_is_unchanged() {
        assert_eq!(
            expand_explanation("D. Tune the temperature"),
            "D. Tune the temperature"
        );
        assert!(expand_explanation("D. Increase the temperature").contains("온도 증가:"));
    }

    #[test]
    fn test_non_matching_and_empty_are_unchanged() {
        assert_eq!(expand_explanation(""), "");
        assert_eq!(expand_explanation("A, C"), "A, C");
        assert_eq!(expand_explanation("See the diagram"), "See the diagram");
    }

    #[test]
    fn test_detailed_answer_is_unchanged() {
        let detailed = format!("A. Accuracy (정확도: {})", "x".repeat(120));
        assert_eq!(expand_explanation(&detailed), detailed);
    }

    #[test]
    fn test_korean_keyword() {
        let out = expand_explanation("B. 데이터 드리프트 감지");
        assert!(out.contains("데이터 드리프트: 프로덕션"));
    }

    #[test]
    fn test_idempotent() {
        for answer in [
            "B. Use transfer learning",
            "C. Something unusual",
            "A. Partial dependence plots (PDPs)",
            "D. Tune the temperature",
            "A, C",
        ] {
            let once = expand_explanation(answer);
            let twice = expand_explanation(&once);
            assert_eq!(once, twice, "answer: {}", answer);
        }
    }
}
