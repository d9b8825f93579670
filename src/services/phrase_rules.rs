//! 选项翻译规则表
//!
//! - `PRODUCT_NAMES`：翻译时保持英文的产品名（按顺序做占位保护）
//! - `PRODUCT_DESCRIPTIONS`：选项只有产品名时附加的韩语说明
//! - `PHRASE_TRANSLATIONS`：英文短语 → 韩语（使用时按长度从长到短匹配）

use phf::phf_map;

pub static PRODUCT_NAMES: &[&str] = &[
    "Amazon", "SageMaker", "Bedrock", "Rekognition", "Comprehend", "Polly", "Lex",
    "QuickSight", "Ground Truth", "Kendra", "Textract", "Transcribe", "Translate",
    "Forecast", "Personalize", "Fraud Detector", "CodeGuru", "DevOps Guru",
    "Lookout", "Monitron", "Panorama", "DeepLens", "DeepRacer", "DeepComposer",
    "S3", "EC2", "Lambda", "CloudFormation", "CloudWatch", "IAM", "VPC", "SNS", "SQS",
    "EKS", "ECS", "Fargate", "Glue", "EMR", "Redshift", "DynamoDB", "RDS",
    "Aurora", "ElastiCache", "Elasticsearch", "OpenSearch", "Athena", "Kinesis",
    "MSK", "EventBridge", "Step Functions", "AppSync", "API Gateway", "Model Monitor",
    "Studio", "Canvas", "Notebook", "Experiments", "Debugger", "Profiler", "Clarify",
    "Feature Store", "MLOps", "AutoPilot", "Batch Transform", "Multi-Model Endpoints",
];

pub static PRODUCT_DESCRIPTIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "Amazon Comprehend" => "자연어 처리 서비스",
    "Amazon Personalize" => "개인화 추천 서비스",
    "Amazon Polly" => "음성 합성 서비스",
    "Amazon Lex" => "대화형 챗봇 서비스",
    "Amazon Rekognition" => "이미지 및 비디오 분석 서비스",
    "Amazon Textract" => "문서 텍스트 추출 서비스",
    "Amazon Transcribe" => "음성-텍스트 변환 서비스",
    "Amazon Translate" => "번역 서비스",
    "Amazon Forecast" => "시계열 예측 서비스",
    "Amazon Kendra" => "엔터프라이즈 검색 서비스",
    "Amazon QuickSight" => "비즈니스 인텔리전스 서비스",
    "Amazon OpenSearch Service" => "검색 및 분석 서비스",
    "Amazon SageMaker" => "머신러닝 플랫폼",
    "Amazon Bedrock" => "생성형 AI 서비스",
    "Amazon SageMaker Ground Truth" => "데이터 라벨링 서비스",
    "Amazon SageMaker Ground Truth Plus" => "데이터 라벨링 서비스",
    "Amazon SageMaker Feature Store" => "피처 스토어",
    "Amazon SageMaker Model Monitor" => "모델 모니터링 서비스",
    "Amazon SageMaker Clarify" => "모델 편향성 분석 서비스",
    "Amazon Fraud Detector" => "사기 탐지 서비스",
    "Amazon CodeGuru" => "코드 리뷰 및 성능 분석 서비스",
    "Amazon DevOps Guru" => "운영 인사이트 서비스",
    "Amazon Lookout" => "산업용 AI 서비스",
    "Amazon Monitron" => "설비 모니터링 서비스",
    "Amazon Panorama" => "엣지 컴퓨터 비전 서비스",
    "Amazon Athena" => "서버리스 쿼리 서비스",
    "Amazon Kinesis" => "실시간 스트리밍 데이터 서비스",
    "Amazon S3" => "객체 스토리지 서비스",
    "Amazon EC2" => "가상 서버 서비스",
    "Amazon Lambda" => "서버리스 컴퓨팅 서비스",
    "Amazon RDS" => "관계형 데이터베이스 서비스",
    "Amazon DynamoDB" => "NoSQL 데이터베이스 서비스",
    "Amazon Redshift" => "데이터 웨어하우스 서비스",
    "Amazon EKS" => "Kubernetes 관리 서비스",
    "Amazon ECS" => "컨테이너 오케스트레이션 서비스",
    "Amazon API Gateway" => "API 관리 서비스",
    "Amazon CloudWatch" => "모니터링 서비스",
    "Amazon EventBridge" => "이벤트 버스 서비스",
    "Amazon Step Functions" => "워크플로우 오케스트레이션 서비스",
    "Amazon AppSync" => "GraphQL API 서비스",
    "Amazon Glue" => "ETL 서비스",
    "Amazon EMR" => "빅데이터 처리 서비스",
    "Amazon MSK" => "Apache Kafka 관리 서비스",
    "Amazon ElastiCache" => "인메모리 캐시 서비스",
    "Amazon Aurora" => "관계형 데이터베이스 서비스",
    "Amazon Elasticsearch" => "검색 및 분석 엔진",
    "Amazon OpenSearch" => "검색 및 분석 엔진",
};

pub static PHRASE_TRANSLATIONS: &[(&str, &str)] = &[
    // 基础 AI 流程
    ("Training", "학습"),
    ("Inference", "추론"),
    ("Model deployment", "모델 배포"),
    ("Bias correction", "편향 보정"),
    ("Data labeling", "데이터 라벨링"),
    ("Data encoding", "데이터 인코딩"),
    ("Data normalization", "데이터 정규화"),
    ("Data balancing", "데이터 균형 조정"),
    // 提示工程
    ("Few-shot prompting", "Few-shot 프롬프팅 (소수 샘플 프롬프팅)"),
    ("Zero-shot prompting", "Zero-shot 프롬프팅 (샘플 없음 프롬프팅)"),
    ("Directional stimulus prompting", "방향성 자극 프롬프팅"),
    ("Chain-of-thought prompting", "Chain-of-thought 프롬프팅 (사고 과정 프롬프팅)"),
    // 推理
    ("Real-time inference", "실시간 추론"),
    ("Serverless inference", "서버리스 추론"),
    ("Asynchronous inference", "비동기 추론"),
    ("Batch transform", "배치 변환"),
    ("Batch inference", "배치 추론"),
    ("Multi-Model Endpoints", "Multi-Model Endpoints (다중 모델 엔드포인트)"),
    // 模型训练
    ("Increase the number of epochs", "에폭 수 증가"),
    ("Decrease the number of epochs", "에폭 수 감소"),
    ("Use transfer learning", "전이 학습 사용"),
    ("Use unsupervised learning", "비지도 학습 사용"),
    ("Re-train the model with fresh data", "최신 데이터로 모델 재학습"),
    ("Retrain the model", "모델 재학습"),
    ("Train a new model", "새 모델 학습"),
    ("Fine-tune the model", "모델 파인튜닝"),
    // LLM
    ("Adjust the prompt", "프롬프트 조정"),
    ("Choose an LLM of a different size", "다른 크기의 LLM 선택"),
    ("Increase the temperature", "온도 증가"),
    ("Increase the Top K value", "Top K 값 증가"),
    ("Deploy optimized small language models (SLMs) on edge devices", "엣지 디바이스에 최적화된 소형 언어 모델(SLM) 배포"),
    ("Deploy optimized large language models (LLMs) on edge devices", "엣지 디바이스에 최적화된 대형 언어 모델(LLM) 배포"),
    ("Incorporate a centralized small language model (SLM) API for asynchronous communication", "비동기 통신을 위한 중앙화된 소형 언어 모델(SLM) API 통합"),
    ("Incorporate a centralized large language model (LLM) API for asynchronous communication", "비동기 통신을 위한 중앙화된 대형 언어 모델(LLM) API 통합"),
    // 可解释性
    ("Code for model training", "모델 학습용 코드"),
    ("Partial dependence plots (PDPs)", "부분 의존성 플롯 (PDPs)"),
    ("Sample data for training", "학습용 샘플 데이터"),
    ("Model convergence tables", "모델 수렴 테이블"),
    ("Decision trees", "의사결정 나무"),
    ("Linear regression", "선형 회귀"),
    ("Logistic regression", "로지스틱 회귀"),
    ("Neural networks", "신경망"),
    // 评估指标
    ("R-squared score", "R-제곱 점수"),
    ("Accuracy", "정확도"),
    ("Root mean squared error (RMSE)", "평균 제곱근 오차 (RMSE)"),
    ("Learning rate", "학습률"),
    ("F1 score", "F1 점수"),
    ("Precision", "정밀도"),
    ("Recall", "재현율"),
    ("Confusion matrix", "혼동 행렬"),
    // 应用类型
    ("Build an automatic named entity recognition system", "자동 명명된 개체 인식 시스템 구축"),
    ("Create a recommendation engine", "추천 엔진 생성"),
    ("Develop a summarization chatbot", "요약 챗봇 개발"),
    ("Develop a multi-language translation system", "다국어 번역 시스템 개발"),
    // 服务用法
    ("Human-in-the-loop validation by using Amazon SageMaker Ground Truth Plus", "Amazon SageMaker Ground Truth Plus를 사용한 인간 개입 검증"),
    ("Data augmentation by using an Amazon Bedrock knowledge base", "Amazon Bedrock 지식 베이스를 사용한 데이터 증강"),
    ("Image recognition by using Amazon Rekognition", "Amazon Rekognition을 사용한 이미지 인식"),
    ("Data summarization by using Amazon QuickSight Q", "Amazon QuickSight Q를 사용한 데이터 요약"),
    ("Ensure that the role that Amazon Bedrock assumes has permission to decrypt data", "Amazon Bedrock이 가정하는 역할이 데이터 복호화 권한을 갖도록 설정"),
    ("Set the access permissions for the S3 buckets to allow public access", "S3 버킷의 액세스 권한을 공개 액세스 허용으로 설정"),
    ("Use prompt engineering techniques to tell the model to look for information", "프롬프트 엔지니어링 기법을 사용하여 모델에 정보를 찾도록 지시"),
    ("Ensure that the S3 data does not contain sensitive information", "S3 데이터에 민감한 정보가 포함되지 않도록 보장"),
    ("Restart the SageMaker AI endpoint", "SageMaker AI 엔드포인트 재시작"),
    ("Adjust the monitoring sensitivity", "모니터링 민감도 조정"),
    ("Set up experiments tracking", "실험 추적 설정"),
    // 数据管理
    ("Store training data", "학습 데이터 저장"),
    ("Store model artifacts", "모델 아티팩트 저장"),
    ("Store inference results", "추론 결과 저장"),
    ("Data preprocessing", "데이터 전처리"),
    ("Data validation", "데이터 검증"),
    ("Data drift detection", "데이터 드리프트 감지"),
    // 监控与运维
    ("Model monitoring", "모델 모니터링"),
    ("Performance monitoring", "성능 모니터링"),
    ("Monitor model performance", "모델 성능 모니터링"),
    ("Track model metrics", "모델 메트릭 추적"),
    ("Set up alerts", "알림 설정"),
    ("Configure monitoring", "모니터링 구성"),
    // 参数调整
    ("Decrease the batch size", "배치 크기 감소"),
    ("Decrease the epochs", "에폭 감소"),
    ("Decrease the number of input tokens on invocations of the LLM", "LLM 호출 시 입력 토큰 수 감소"),
    ("Define a higher number for the temperature parameter", "온도 파라미터에 더 높은 값 정의"),
    ("Choose a lower temperature value", "더 낮은 온도 값 선택"),
    ("Auto scaling inference endpoints", "자동 확장 추론 엔드포인트"),
    // 系统类型
    ("Anomaly detection", "이상 탐지"),
    ("Analyzing financial data to forecast stock market trends", "주식 시장 동향 예측을 위한 금융 데이터 분석"),
    ("Building an application by using an existing third-party generative AI foundation model (FM)", "기존 서드파티 생성형 AI 기반 모델(FM)을 사용한 애플리케이션 구축"),
    ("Building and training a generative AI model from scratch by using specific data that a customer owns", "고객이 소유한 특정 데이터를 사용하여 처음부터 생성형 AI 모델 구축 및 학습"),
    ("Creating photorealistic images from text descriptions for digital marketing", "디지털 마케팅을 위한 텍스트 설명에서 사실적 이미지 생성"),
    ("Enhancing database performance by using optimized indexing", "최적화된 인덱싱을 사용한 데이터베이스 성능 향상"),
    ("Avoid using LLMs that are not listed in Amazon SageMaker", "Amazon SageMaker에 나열되지 않은 LLM 사용 피하기"),
    // 通用动词（短，最后匹配）
    ("Deploy", "배포"),
    ("Train", "학습"),
    ("Monitor", "모니터링"),
    ("Track", "추적"),
    ("Configure", "구성"),
    ("Optimize", "최적화"),
    ("Scale", "확장"),
    ("Restart", "재시작"),
    ("Create", "생성"),
    ("Build", "구축"),
    ("Develop", "개발"),
    ("Set up", "설정"),
    ("Ensure", "보장"),
    ("Use", "사용"),
    ("Adjust", "조정"),
    ("Increase", "증가"),
    ("Decrease", "감소"),
];
