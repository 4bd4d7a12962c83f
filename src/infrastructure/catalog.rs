//! Built-in training catalog: modules → lessons → quizzes. Read-only
//! fixture data rebuilt at startup; nothing here persists.

use crate::domain::entities::training::{Lesson, Module, QuizQuestion};

fn question(question: &str, options: &[&str], correct: usize, explanation: &str) -> QuizQuestion {
    QuizQuestion {
        question: question.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct,
        explanation: explanation.to_string(),
    }
}

pub fn builtin_modules() -> Vec<Module> {
    vec![
        gpu_fundamentals(),
        tco_modeling(),
        neocloud_economics(),
        market_data_integration(),
    ]
}

fn gpu_fundamentals() -> Module {
    Module {
        id: "gpu_fundamentals".to_string(),
        title: "GPU Architecture Fundamentals".to_string(),
        description: "Learn about GPU architectures for AI/ML workloads".to_string(),
        lessons: vec![
            Lesson {
                id: "gpu_1".to_string(),
                title: "Introduction to AI GPUs".to_string(),
                content: r#"
# Introduction to AI GPUs

Modern AI training and inference rely heavily on specialized GPU hardware.

## Key Concepts

**1. GPU vs CPU for AI**
- GPUs excel at parallel processing
- Thousands of cores vs dozens in CPUs
- Optimized for matrix operations

**2. Key Specifications**
- **TFLOPS**: Trillion floating-point operations per second
- **Memory Bandwidth**: GB/s data transfer rate
- **TDP**: Thermal Design Power in watts

**3. Major Players**
- NVIDIA: H100, H200, B200 (Blackwell)
- AMD: MI300X
- Intel: Gaudi series
"#
                .to_string(),
                quiz: vec![
                    question(
                        "Why are GPUs better than CPUs for AI training?",
                        &[
                            "Higher clock speed",
                            "Massive parallelism for matrix operations",
                            "Lower power consumption",
                            "Simpler programming model",
                        ],
                        1,
                        "GPUs have thousands of cores optimized for parallel matrix operations, \
                         which are fundamental to neural network computations.",
                    ),
                    question(
                        "What does TFLOPS measure?",
                        &[
                            "Memory capacity",
                            "Power consumption",
                            "Floating-point operations per second",
                            "Data transfer speed",
                        ],
                        2,
                        "TFLOPS (Trillion FLOPS) measures computational throughput - how many \
                         floating-point operations the GPU can perform per second.",
                    ),
                ],
            },
            Lesson {
                id: "gpu_2".to_string(),
                title: "NVIDIA Datacenter GPUs".to_string(),
                content: r#"
# NVIDIA Datacenter GPU Evolution

## Architecture Generations

**1. Ampere (A100)**
- 7nm process
- 80GB HBM2e
- 312 TFLOPS FP16

**2. Hopper (H100/H200)**
- 4nm process
- 80-141GB HBM3/HBM3e
- 1,979 TFLOPS FP16
- Transformer Engine

**3. Blackwell (B100/B200)**
- 4nm process
- 192GB HBM3e
- ~4,500 TFLOPS FP16
- Second-gen Transformer Engine

## Key Innovations
- NVLink for multi-GPU communication
- HBM (High Bandwidth Memory)
- Tensor Cores for AI operations
"#
                .to_string(),
                quiz: vec![question(
                    "Which architecture introduced the Transformer Engine?",
                    &["Ampere", "Hopper", "Blackwell", "Volta"],
                    1,
                    "The Transformer Engine was introduced with the Hopper architecture (H100), \
                     providing optimized performance for transformer-based models.",
                )],
            },
        ],
    }
}

fn tco_modeling() -> Module {
    Module {
        id: "tco_modeling".to_string(),
        title: "TCO Modeling for GPU Infrastructure".to_string(),
        description: "Master total cost of ownership calculations".to_string(),
        lessons: vec![
            Lesson {
                id: "tco_1".to_string(),
                title: "TCO Components".to_string(),
                content: r#"
# Total Cost of Ownership Components

## Capital Expenditure (CapEx)

**Hardware Costs:**
- GPUs: $15,000 - $40,000 each
- Servers: $5,000 - $15,000
- Networking: $500 - $2,000 per GPU
- Storage: Variable

## Operating Expenditure (OpEx)

**1. Power Costs**
```
Annual Power = TDP x Hours x PUE / 1000 x Rate

Example (H100):
= 700W x 8,760h x 1.3 / 1000 x $0.08/kWh
= $6,370 per GPU per year
```

**2. Cooling (included in PUE)**
- PUE 1.2 = 20% cooling overhead
- PUE 1.5 = 50% cooling overhead

**3. Maintenance**
- Typically 5-10% of CapEx annually

**4. Personnel**
- Often overlooked but significant
"#
                .to_string(),
                quiz: vec![
                    question(
                        "What does PUE stand for?",
                        &[
                            "Power Unit Efficiency",
                            "Power Usage Effectiveness",
                            "Processing Unit Energy",
                            "Parallel Utilization Efficiency",
                        ],
                        1,
                        "PUE (Power Usage Effectiveness) measures datacenter efficiency - total \
                         facility power divided by IT equipment power. A PUE of 1.3 means 30% \
                         overhead.",
                    ),
                    question(
                        "If an H100 has 700W TDP and runs 24/7, what's the annual kWh consumption?",
                        &["5,000 kWh", "6,132 kWh", "8,760 kWh", "10,000 kWh"],
                        1,
                        "700W x 8,760 hours = 6,132 kWh per year (not including PUE overhead)",
                    ),
                ],
            },
            Lesson {
                id: "tco_2".to_string(),
                title: "Build vs Buy Analysis".to_string(),
                content: r#"
# Build vs Buy: On-Premise vs Cloud

## On-Premise Advantages
- Lower long-term costs at high utilization
- Full control over hardware
- Data sovereignty
- Predictable costs

## Cloud Advantages
- No upfront capital
- Scalability
- Latest hardware access
- Geographic distribution

## Break-Even Analysis

**Key Variables:**
- Utilization rate
- Time horizon
- Cloud pricing
- Capital cost of equipment

**Rule of Thumb:**
- <50% utilization: Cloud usually wins
- >70% utilization: On-premise usually wins
- 50-70%: Detailed analysis needed
"#
                .to_string(),
                quiz: vec![question(
                    "At what utilization rate does on-premise typically become more cost-effective?",
                    &["20-30%", "40-50%", "70%+", "90%+"],
                    2,
                    "Generally, on-premise infrastructure becomes more cost-effective above 70% \
                     utilization, when the fixed costs are spread across substantial usage.",
                )],
            },
        ],
    }
}

fn neocloud_economics() -> Module {
    Module {
        id: "neocloud_economics".to_string(),
        title: "Neocloud Provider Economics".to_string(),
        description: "Analyze GPU cloud provider business models".to_string(),
        lessons: vec![Lesson {
            id: "neo_1".to_string(),
            title: "Neocloud Business Models".to_string(),
            content: r#"
# Neocloud Provider Economics

## What are Neoclouds?
Specialized cloud providers focused on GPU/AI infrastructure, distinct from hyperscalers.

## Key Players
- **CoreWeave**: Kubernetes-native GPU cloud
- **Lambda Labs**: Developer-focused ML cloud
- **Together AI**: Inference optimization
- **Crusoe**: Sustainable/stranded energy focus

## Business Model Components

**1. Infrastructure Costs**
- GPU procurement (often with NVIDIA allocation)
- Datacenter capacity
- Networking

**2. Revenue Streams**
- On-demand GPU hours
- Reserved capacity
- Managed services

**3. Unit Economics**
```
Gross Margin = (Hourly Rate - Hourly Cost) / Hourly Rate

Example:
Selling H100 at $3.50/hr
Cost: $1.50/hr (including depreciation, power, ops)
Gross Margin = 57%
```
"#
            .to_string(),
            quiz: vec![question(
                "What differentiates neoclouds from hyperscalers?",
                &[
                    "Lower prices",
                    "GPU/AI infrastructure specialization",
                    "More datacenters",
                    "Better customer support",
                ],
                1,
                "Neoclouds specialize in GPU/AI infrastructure, offering purpose-built solutions \
                 rather than general-purpose cloud services.",
            )],
        }],
    }
}

fn market_data_integration() -> Module {
    Module {
        id: "market_data_integration".to_string(),
        title: "Market Data Integration".to_string(),
        description: "Learn to integrate live market data feeds".to_string(),
        lessons: vec![Lesson {
            id: "mkt_1".to_string(),
            title: "Market Data Gateway Overview".to_string(),
            content: r#"
# Market Data Gateway Integration

## Connection Modes

**1. Live Gateway**
- Session-based connection to a terminal gateway
- localhost:8194 by default
- Requires an active data subscription

**2. Fixture Mode**
- Deterministic built-in data
- No external dependency
- Used automatically when no gateway is configured

## Key Services

**Reference Data (refdata)**
- Current prices
- Company fundamentals

**Historical Data**
- Daily price series
- Business days only; weekends are skipped

## Request Shape

```
POST /api/market/reference-data
{
  "securities": ["NVDA US Equity"],
  "fields": ["PX_LAST", "CUR_MKT_CAP"]
}
```

A session must be opened with `POST /api/market/connect` before requesting
data; the connection status is visible at `GET /api/market/status`.
"#
            .to_string(),
            quiz: vec![question(
                "What port does the market data gateway listen on by default?",
                &["8080", "8194", "443", "3000"],
                1,
                "The market data gateway listens on port 8194 by default.",
            )],
        }],
    }
}
